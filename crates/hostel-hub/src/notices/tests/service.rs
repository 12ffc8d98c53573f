use std::sync::Arc;

use super::common::*;
use crate::notices::domain::{Audience, NoticeId};
use crate::notices::repository::RepositoryError;
use crate::notices::{NoticeBoardError, NoticeBoardService};
use crate::session::Role;
use axum::http::StatusCode;

#[test]
fn visible_to_filters_stored_notices() {
    let (service, _repository) = build_service(mixed_board());

    let manager = service.visible_to(Role::Manager).expect("list succeeds");
    let guest = service.visible_to(Role::Guest).expect("list succeeds");

    assert_eq!(ids(&manager), vec!["manager-global"]);
    assert_eq!(ids(&guest), vec!["user-global"]);
}

#[test]
fn admin_publishes_with_sequenced_id() {
    let (service, repository) = build_service(Vec::new());

    let first = service
        .publish(Role::Admin, draft(Audience::Manager))
        .expect("admin may publish");
    let second = service
        .publish(Role::Admin, draft(Audience::User))
        .expect("admin may publish");

    assert!(first.id.0.starts_with("notice-"));
    assert_ne!(first.id, second.id);
    assert_eq!(repository.snapshot().len(), 2);

    let manager = service.visible_to(Role::Manager).expect("list succeeds");
    assert_eq!(ids(&manager), vec![first.id.0.as_str()]);
}

#[test]
fn non_admins_cannot_publish_or_retract() {
    let (service, repository) = build_service(mixed_board());

    for actor in [Role::Guest, Role::User, Role::Manager] {
        let err = service
            .publish(actor, draft(Audience::Both))
            .expect_err("publish forbidden");
        assert!(matches!(err, NoticeBoardError::Forbidden(role) if role == actor));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = service
            .retract(actor, &NoticeId("user-global".to_string()))
            .expect_err("retract forbidden");
        assert!(matches!(err, NoticeBoardError::Forbidden(_)));
    }

    assert_eq!(repository.snapshot().len(), 3);
}

#[test]
fn blank_drafts_are_rejected() {
    let (service, repository) = build_service(Vec::new());
    let mut untitled = draft(Audience::User);
    untitled.title = "   ".to_string();
    let mut empty = draft(Audience::User);
    empty.content = String::new();

    let err = service.publish(Role::Admin, untitled).expect_err("blank title");
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err.to_string().contains("title"));

    let err = service.publish(Role::Admin, empty).expect_err("blank content");
    assert!(err.to_string().contains("content"));

    assert!(repository.snapshot().is_empty());
}

#[test]
fn retract_removes_notice_and_reports_missing_ids() {
    let (service, repository) = build_service(mixed_board());

    let removed = service
        .retract(Role::Admin, &NoticeId("user-global".to_string()))
        .expect("retract succeeds");
    assert_eq!(removed.id.0, "user-global");
    assert_eq!(ids(&repository.snapshot()), vec!["manager-global", "both-local"]);

    let err = service
        .retract(Role::Admin, &NoticeId("user-global".to_string()))
        .expect_err("already gone");
    assert!(matches!(
        err,
        NoticeBoardError::Repository(RepositoryError::NotFound)
    ));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn repository_outages_surface_as_service_unavailable() {
    let service = NoticeBoardService::new(Arc::new(OfflineRepository));

    let err = service.visible_to(Role::User).expect_err("repository offline");

    assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(err.to_string().contains("database offline"));
}
