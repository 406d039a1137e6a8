mod vote_ledger;

pub use vote_ledger::VoteLedger;
