mod choice;
mod tally;

pub use choice::Choice;
pub use tally::Tally;
