use hostel_hub::error::AppError;
use hostel_hub::notices::{
    Notice, NoticeBoardError, NoticeCsvImporter, NoticeId, NoticeRepository, RepositoryError,
};
use hostel_hub::Role;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local notice board; notices keep their publication order.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryNoticeRepository {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl InMemoryNoticeRepository {
    /// Build a board from an optional CSV seed.
    pub(crate) fn seeded(seed: Option<&Path>) -> Result<Self, AppError> {
        let repository = Self::default();
        if let Some(path) = seed {
            for notice in NoticeCsvImporter::from_path(path)? {
                repository
                    .insert(notice)
                    .map_err(NoticeBoardError::from)?;
            }
            tracing::info!(path = %path.display(), "notice board seeded");
        }
        Ok(repository)
    }
}

impl NoticeRepository for InMemoryNoticeRepository {
    fn list(&self) -> Result<Vec<Notice>, RepositoryError> {
        let guard = self.notices.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
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

pub(crate) fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse::<Role>().map_err(|err| err.to_string())
}
