use crate::config::ConfigError;
use crate::notices::{NoticeBoardError, NoticeImportError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    NoticeImport(NoticeImportError),
    NoticeBoard(NoticeBoardError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::NoticeImport(err) => write!(f, "notice import error: {}", err),
            AppError::NoticeBoard(err) => write!(f, "notice board error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::NoticeImport(err) => Some(err),
            AppError::NoticeBoard(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoticeImport(_) => StatusCode::BAD_REQUEST,
            AppError::NoticeBoard(err) => err.status_code(),
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        json_error(status, self.to_string())
    }
}

/// JSON `{ "error": ... }` body shared by every router.
pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(json!({ "error": message.into() }));
    (status, body).into_response()
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<NoticeImportError> for AppError {
    fn from(value: NoticeImportError) -> Self {
        Self::NoticeImport(value)
    }
}

impl From<NoticeBoardError> for AppError {
    fn from(value: NoticeBoardError) -> Self {
        Self::NoticeBoard(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::RepositoryError;
    use crate::session::Role;

    #[test]
    fn notice_board_errors_keep_their_status() {
        let forbidden = AppError::from(NoticeBoardError::Forbidden(Role::Manager));
        assert_eq!(forbidden.into_response().status(), StatusCode::FORBIDDEN);

        let missing = AppError::from(NoticeBoardError::from(RepositoryError::NotFound));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(io.to_string().contains("disk full"));
        assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let config = AppError::from(ConfigError::InvalidPort);
        assert_eq!(
            config.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
