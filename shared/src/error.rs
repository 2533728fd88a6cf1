use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Why a submission was turned away. Shown inline under the form.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Rejection {
    #[error("Please fill out your name, email, and select an option.")]
    MissingFields,
    #[error("This ISU email has already voted on this device. Thank you for participating!")]
    DuplicateEmail,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Storage access failed: {0}")]
    Access(String),
    #[error("Storage quota exceeded ({needed} bytes needed, limit {limit})")]
    Quota { needed: usize, limit: usize },
    #[error("Malformed vote data: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
