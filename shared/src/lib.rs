pub mod error;
pub mod models;
pub mod validation;
pub mod store;
pub mod poll;
pub mod animation;

pub use error::{Rejection, Result, StoreError};
pub use models::*;
pub use validation::*;
pub use store::{JsonVoteStore, MemorySlot, StorageSlot, VoteStore, STORAGE_KEY};
pub use poll::{PollController, PollMessage, render_results, tally};

#[cfg(test)]
mod tests;
