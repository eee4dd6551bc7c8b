//! Per-user, per-deck answer tallies.

/// A user's self-report on a revealed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    Correct,
    Incorrect,
}

impl Judgment {
    #[must_use]
    pub fn from_is_correct(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Answered/correct/incorrect counters.
///
/// `answered == correct + incorrect` always holds: the only mutator is
/// [`ProgressCounts::record`], which bumps `answered` together with exactly one
/// of the other two. Counters never go down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounts {
    answered: u32,
    correct: u32,
    incorrect: u32,
}

impl ProgressCounts {
    /// Build counters from server data.
    ///
    /// The server's `answered` column is not trusted; it is recomputed from the
    /// two tallies so the local invariant holds even for inconsistent rows.
    #[must_use]
    pub fn from_persisted(correct: u32, incorrect: u32) -> Self {
        Self {
            answered: correct.saturating_add(incorrect),
            correct,
            incorrect,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn record(&mut self, judgment: Judgment) {
        match judgment {
            Judgment::Correct => self.correct = self.correct.saturating_add(1),
            Judgment::Incorrect => self.incorrect = self.incorrect.saturating_add(1),
        }
        self.answered = self.correct.saturating_add(self.incorrect);
    }
}
