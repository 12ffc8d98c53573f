use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{Notice, NoticeDraft, NoticeId};
use super::repository::NoticeRepository;
use super::service::{NoticeBoardError, NoticeBoardService};
use crate::error::json_error;
use crate::session::{Role, UnknownRole};

/// Router builder exposing the marquee feed and admin publishing.
pub fn notice_router<R>(service: Arc<NoticeBoardService<R>>) -> Router
where
    R: NoticeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/notices",
            get(list_handler::<R>).post(publish_handler::<R>),
        )
        .route("/api/v1/notices/:notice_id", delete(retract_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewerQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
}

impl ViewerQuery {
    fn role(&self) -> Result<Role, UnknownRole> {
        self.role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NoticeFeed {
    pub(crate) role: Role,
    pub(crate) notices: Vec<Notice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PublishRequest {
    pub(crate) actor: String,
    #[serde(flatten)]
    pub(crate) draft: NoticeDraft,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<NoticeBoardService<R>>>,
    Query(query): Query<ViewerQuery>,
) -> Response
where
    R: NoticeRepository + 'static,
{
    let role = match query.role() {
        Ok(role) => role,
        Err(error) => return json_error(StatusCode::BAD_REQUEST, error.to_string()),
    };

    match service.visible_to(role) {
        Ok(notices) => (StatusCode::OK, Json(NoticeFeed { role, notices })).into_response(),
        Err(error) => board_error(error),
    }
}

pub(crate) async fn publish_handler<R>(
    State(service): State<Arc<NoticeBoardService<R>>>,
    Json(request): Json<PublishRequest>,
) -> Response
where
    R: NoticeRepository + 'static,
{
    let actor = match request.actor.parse::<Role>() {
        Ok(actor) => actor,
        Err(error) => return json_error(StatusCode::BAD_REQUEST, error.to_string()),
    };

    match service.publish(actor, request.draft) {
        Ok(notice) => (StatusCode::CREATED, Json(notice)).into_response(),
        Err(error) => board_error(error),
    }
}

pub(crate) async fn retract_handler<R>(
    State(service): State<Arc<NoticeBoardService<R>>>,
    Path(notice_id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Response
where
    R: NoticeRepository + 'static,
{
    let actor = match query.role() {
        Ok(actor) => actor,
        Err(error) => return json_error(StatusCode::BAD_REQUEST, error.to_string()),
    };

    match service.retract(actor, &NoticeId(notice_id)) {
        Ok(notice) => (StatusCode::OK, Json(notice)).into_response(),
        Err(error) => board_error(error),
    }
}

fn board_error(error: NoticeBoardError) -> Response {
    if let NoticeBoardError::Repository(ref source) = error {
        tracing::warn!(%source, "notice repository failure");
    }
    json_error(error.status_code(), error.to_string())
}
