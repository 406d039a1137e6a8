pub mod vote;

pub use vote::Entity as Vote;
