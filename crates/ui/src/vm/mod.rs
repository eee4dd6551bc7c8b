mod card_vm;
mod deck_vm;
mod study_vm;

pub use card_vm::{CardRowVm, map_card_rows};
pub use deck_vm::{
    DeckTileVm, FilterField, exam_board_options, map_deck_tiles, subject_options,
    year_group_options,
};
pub use study_vm::{StudyIntent, StudyPhase, StudyStatsVm, StudyVm, load_study};
