//! Phone-number and password policy applied before a credential is accepted.
//!
//! A refused credential is an ordinary outcome, not an error: the validators
//! return booleans and assessments that forms show straight to the user.

mod password;
mod phone;
pub mod router;

pub use password::{
    evaluate_password_strength, PasswordAssessment, PasswordRejection, MIN_PASSWORD_LENGTH,
};
pub use phone::is_valid_phone_number;
pub use router::credential_router;

/// Registration-form view of the credential rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPolicy;

impl CredentialPolicy {
    /// Check a phone/password pair in form order: phone first, then password.
    pub fn check_registration(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<(), CredentialViolation> {
        if !is_valid_phone_number(phone) {
            return Err(CredentialViolation::InvalidPhone);
        }

        if let Some(rejection) = password::first_rejection(password) {
            return Err(CredentialViolation::WeakPassword(rejection));
        }

        Ok(())
    }
}

/// First credential rule a registration attempt broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialViolation {
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("{}", .0.message())]
    WeakPassword(PasswordRejection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_accepts_valid_pair() {
        let policy = CredentialPolicy;
        assert_eq!(policy.check_registration("017-1234-5678", "Xk7!pQz9"), Ok(()));
    }

    #[test]
    fn registration_checks_phone_before_password() {
        let policy = CredentialPolicy;
        assert_eq!(
            policy.check_registration("12345", "short"),
            Err(CredentialViolation::InvalidPhone)
        );
    }

    #[test]
    fn weak_password_surfaces_the_rule_message() {
        let policy = CredentialPolicy;
        let violation = policy
            .check_registration("+8801812345678", "MyPassword1")
            .expect_err("weak password refused");

        assert_eq!(
            violation,
            CredentialViolation::WeakPassword(PasswordRejection::CommonPattern)
        );
        assert_eq!(
            violation.to_string(),
            PasswordRejection::CommonPattern.message()
        );
    }
}
