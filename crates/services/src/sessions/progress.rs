use std::fmt;

/// Where the cursor sits within the deck, one-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyPosition {
    pub number: usize,
    pub total: usize,
}

impl fmt::Display for StudyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card {} of {}", self.number, self.total)
    }
}
