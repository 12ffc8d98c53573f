use std::sync::{Arc, Mutex};

use crate::notices::domain::{Audience, Notice, NoticeDraft, NoticeId};
use crate::notices::repository::{NoticeRepository, RepositoryError};
use crate::notices::NoticeBoardService;

pub(super) fn notice(id: &str, audience: Audience, is_global: bool) -> Notice {
    Notice {
        id: NoticeId(id.to_string()),
        title: format!("Notice {id}"),
        content: format!("Body of notice {id}"),
        is_global,
        audience,
    }
}

/// The three-notice board used throughout: manager/global, user/global, both/local.
pub(super) fn mixed_board() -> Vec<Notice> {
    vec![
        notice("manager-global", Audience::Manager, true),
        notice("user-global", Audience::User, true),
        notice("both-local", Audience::Both, false),
    ]
}

pub(super) fn draft(audience: Audience) -> NoticeDraft {
    NoticeDraft {
        title: "Generator maintenance".to_string(),
        content: "Power will be off from 10am to noon on Saturday.".to_string(),
        is_global: true,
        audience,
    }
}

pub(super) fn build_service(
    seed: Vec<Notice>,
) -> (NoticeBoardService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with_notices(seed));
    let service = NoticeBoardService::new(repository.clone());
    (service, repository)
}

pub(super) fn ids(notices: &[Notice]) -> Vec<&str> {
    notices.iter().map(|notice| notice.id.0.as_str()).collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryRepository {
    pub(super) fn with_notices(notices: Vec<Notice>) -> Self {
        Self {
            notices: Arc::new(Mutex::new(notices)),
        }
    }

    pub(super) fn snapshot(&self) -> Vec<Notice> {
        self.notices.lock().expect("repository mutex poisoned").clone()
    }
}

impl NoticeRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<Notice>, RepositoryError> {
        Ok(self.snapshot())
    }

    fn insert(&self, notice: Notice) -> Result<Notice, RepositoryError> {
        let mut guard = self.notices.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == notice.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(notice.clone());
        Ok(notice)
    }

    fn remove(&self, id: &NoticeId) -> Result<Notice, RepositoryError> {
        let mut guard = self.notices.lock().expect("repository mutex poisoned");
        let position = guard
            .iter()
            .position(|notice| &notice.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(guard.remove(position))
    }
}

/// Repository that is always down, for error-path assertions.
pub(super) struct OfflineRepository;

impl NoticeRepository for OfflineRepository {
    fn list(&self) -> Result<Vec<Notice>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _notice: Notice) -> Result<Notice, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &NoticeId) -> Result<Notice, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
