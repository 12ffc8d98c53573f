//! Broadcast notices: who sees what on the marquee, and how notices get onto the board.
//!
//! Audience resolution is a pure function over the notice list and the viewer's
//! role. The board service adds admin-only publishing on top of a repository.

pub mod domain;
mod import;
pub mod repository;
mod resolver;
pub mod router;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{Audience, Notice, NoticeDraft, NoticeId, UnknownAudience};
pub use import::{NoticeCsvImporter, NoticeImportError};
pub use repository::{NoticeRepository, RepositoryError};
pub use resolver::select_relevant_notices;
pub use router::notice_router;
pub use service::{NoticeBoardError, NoticeBoardService};
