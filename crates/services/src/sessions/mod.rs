mod progress;
mod recorder;
mod service;
mod workflow;

// Public API of the study session subsystem.
pub use crate::error::StudyError;
pub use progress::StudyPosition;
pub use recorder::{JudgmentRecorder, ReconciliationPolicy, RemoteJudgmentRecorder};
pub use service::{PendingJudgment, SentJudgment, StudySession};
pub use workflow::StudyLoopService;
