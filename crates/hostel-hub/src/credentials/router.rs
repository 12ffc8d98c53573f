use axum::{routing::post, Json, Router};
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    evaluate_password_strength, is_valid_phone_number, CredentialPolicy, PasswordAssessment,
};

/// Router builder exposing the credential checks used by sign-up forms.
pub fn credential_router() -> Router {
    Router::new()
        .route("/api/v1/credentials/phone", post(phone_handler))
        .route("/api/v1/credentials/password", post(password_handler))
        .route("/api/v1/credentials/registration", post(registration_handler))
}

/// A missing or `null` `candidate` is checked as the empty string.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateRequest {
    #[serde(default, deserialize_with = "text_or_null")]
    pub(crate) candidate: String,
}

/// Sign-up form fields; missing or `null` fields are checked as empty strings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegistrationRequest {
    #[serde(default, deserialize_with = "text_or_null")]
    pub(crate) phone: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub(crate) password: String,
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Serialize)]
pub(crate) struct PhoneCheckResponse {
    pub(crate) valid: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegistrationCheckResponse {
    pub(crate) valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reason: Option<String>,
}

pub(crate) async fn phone_handler(
    Json(request): Json<CandidateRequest>,
) -> Json<PhoneCheckResponse> {
    let valid = is_valid_phone_number(&request.candidate);
    tracing::debug!(valid, "phone candidate checked");
    Json(PhoneCheckResponse { valid })
}

pub(crate) async fn password_handler(
    Json(request): Json<CandidateRequest>,
) -> Json<PasswordAssessment> {
    let assessment = evaluate_password_strength(&request.candidate);
    tracing::debug!(
        valid = assessment.valid,
        rejection = ?assessment.rejection(),
        "password candidate checked"
    );
    Json(assessment)
}

pub(crate) async fn registration_handler(
    Json(request): Json<RegistrationRequest>,
) -> Json<RegistrationCheckResponse> {
    let outcome = CredentialPolicy.check_registration(&request.phone, &request.password);
    tracing::debug!(violation = ?outcome.err(), "registration credentials checked");
    Json(RegistrationCheckResponse {
        valid: outcome.is_ok(),
        reason: outcome.err().map(|violation| violation.to_string()),
    })
}
