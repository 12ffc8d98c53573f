use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;

use super::domain::{Notice, NoticeDraft, NoticeId};
use super::repository::{NoticeRepository, RepositoryError};
use super::resolver::select_relevant_notices;
use crate::session::Role;

/// Service pairing the notice repository with the audience rules.
pub struct NoticeBoardService<R> {
    repository: Arc<R>,
}

static NOTICE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_notice_id() -> NoticeId {
    let id = NOTICE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    NoticeId(format!("notice-{id:06}"))
}

impl<R> NoticeBoardService<R>
where
    R: NoticeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Notices to put on the marquee for `viewer`, in stored order.
    pub fn visible_to(&self, viewer: Role) -> Result<Vec<Notice>, NoticeBoardError> {
        let notices = self.repository.list()?;
        let visible: Vec<Notice> = select_relevant_notices(&notices, viewer)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            viewer = %viewer,
            total = notices.len(),
            visible = visible.len(),
            "resolved notices for viewer"
        );
        Ok(visible)
    }

    /// Broadcast a new notice. Only admins may publish.
    pub fn publish(&self, actor: Role, draft: NoticeDraft) -> Result<Notice, NoticeBoardError> {
        ensure_admin(actor)?;

        if draft.title.trim().is_empty() {
            return Err(NoticeBoardError::InvalidDraft("title must not be blank"));
        }
        if draft.content.trim().is_empty() {
            return Err(NoticeBoardError::InvalidDraft("content must not be blank"));
        }

        let notice = self.repository.insert(draft.into_notice(next_notice_id()))?;
        tracing::info!(
            notice_id = %notice.id,
            audience = notice.audience.label(),
            is_global = notice.is_global,
            "notice published"
        );
        Ok(notice)
    }

    /// Take a notice off the board. Only admins may retract.
    pub fn retract(&self, actor: Role, id: &NoticeId) -> Result<Notice, NoticeBoardError> {
        ensure_admin(actor)?;

        let notice = self.repository.remove(id)?;
        tracing::info!(notice_id = %notice.id, "notice retracted");
        Ok(notice)
    }
}

fn ensure_admin(actor: Role) -> Result<(), NoticeBoardError> {
    if actor == Role::Admin {
        Ok(())
    } else {
        Err(NoticeBoardError::Forbidden(actor))
    }
}

/// Error raised by the notice board service.
#[derive(Debug, thiserror::Error)]
pub enum NoticeBoardError {
    #[error("role '{0}' may not manage notices")]
    Forbidden(Role),
    #[error("invalid notice: {0}")]
    InvalidDraft(&'static str),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl NoticeBoardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoticeBoardError::Forbidden(_) => StatusCode::FORBIDDEN,
            NoticeBoardError::InvalidDraft(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NoticeBoardError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            NoticeBoardError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            NoticeBoardError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}
