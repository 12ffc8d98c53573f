use super::domain::{Notice, NoticeId};

/// Storage abstraction so the notice board can be exercised in isolation.
pub trait NoticeRepository: Send + Sync {
    /// Every stored notice in publication order.
    fn list(&self) -> Result<Vec<Notice>, RepositoryError>;
    fn insert(&self, notice: Notice) -> Result<Notice, RepositoryError>;
    fn remove(&self, id: &NoticeId) -> Result<Notice, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("notice already exists")]
    Conflict,
    #[error("notice not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
