use super::Choice;
use serde::{Deserialize, Serialize};

/// Aggregate counts of recorded choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: u64,
    pub no: u64,
    pub total: u64,
}

impl Tally {
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Choice, u64)>,
    {
        let mut tally = Self::default();
        for (choice, count) in counts {
            match choice {
                Choice::Yes => tally.yes += count,
                Choice::No => tally.no += count,
            }
        }
        tally.total = tally.yes + tally.no;
        tally
    }
}
