use crate::infra::{parse_role, InMemoryNoticeRepository};
use clap::{Args, Subcommand};
use hostel_hub::credentials::{evaluate_password_strength, is_valid_phone_number, CredentialPolicy};
use hostel_hub::error::AppError;
use hostel_hub::notices::{Notice, NoticeBoardService};
use hostel_hub::Role;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct NoticesArgs {
    /// Viewer role (guest, user/student, manager, admin)
    #[arg(long, value_parser = parse_role, default_value = "guest")]
    pub(crate) role: Role,
    /// CSV seed with id,title,content,is_global,audience columns
    #[arg(long)]
    pub(crate) seed: PathBuf,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CheckCommand {
    /// Validate a phone number
    Phone { candidate: String },
    /// Evaluate a password against the strength rules
    Password { candidate: String },
    /// Check a sign-up phone/password pair, phone first
    Registration {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
}

pub(crate) fn run_notices(args: NoticesArgs) -> Result<(), AppError> {
    let NoticesArgs { role, seed } = args;

    let repository = InMemoryNoticeRepository::seeded(Some(&seed))?;
    let service = NoticeBoardService::new(Arc::new(repository));
    let notices = service.visible_to(role)?;

    print!("{}", render_notices(role, &notices));
    Ok(())
}

pub(crate) fn run_check(command: CheckCommand) {
    println!("{}", render_check(&command));
}

fn render_notices(role: Role, notices: &[Notice]) -> String {
    let mut output = format!("Notices for {role} ({})\n", notices.len());
    if notices.is_empty() {
        output.push_str("- nothing to show\n");
    }
    for notice in notices {
        output.push_str(&format!(
            "- [{}] {} ({}): {}\n",
            notice.id,
            notice.title,
            notice.audience.label(),
            notice.content
        ));
    }
    output
}

fn render_check(command: &CheckCommand) -> String {
    match command {
        CheckCommand::Phone { candidate } => {
            if is_valid_phone_number(candidate) {
                format!("phone '{candidate}': valid")
            } else {
                format!("phone '{candidate}': invalid")
            }
        }
        CheckCommand::Password { candidate } => {
            let assessment = evaluate_password_strength(candidate);
            match assessment.reason {
                None => "password: valid".to_string(),
                Some(reason) => format!("password: rejected ({reason})"),
            }
        }
        CheckCommand::Registration { phone, password } => {
            match CredentialPolicy.check_registration(phone, password) {
                Ok(()) => "registration: valid".to_string(),
                Err(violation) => format!("registration: rejected ({violation})"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_hub::notices::{Audience, NoticeId};

    #[test]
    fn renders_empty_feed() {
        let output = render_notices(Role::Manager, &[]);
        assert_eq!(output, "Notices for manager (0)\n- nothing to show\n");
    }

    #[test]
    fn renders_each_notice_on_its_own_line() {
        let notices = vec![Notice {
            id: NoticeId("7".to_string()),
            title: "Curfew".to_string(),
            content: "Gates close at 11pm".to_string(),
            is_global: true,
            audience: Audience::User,
        }];

        let output = render_notices(Role::User, &notices);

        assert!(output.starts_with("Notices for user (1)\n"));
        assert!(output.contains("- [7] Curfew (user): Gates close at 11pm"));
    }

    #[test]
    fn check_output_reports_rejection_reason() {
        let output = render_check(&CheckCommand::Password {
            candidate: "password123".to_string(),
        });
        assert_eq!(
            output,
            "password: rejected (Password is too weak: it contains a common pattern.)"
        );

        let output = render_check(&CheckCommand::Phone {
            candidate: "01812345678".to_string(),
        });
        assert_eq!(output, "phone '01812345678': valid");
    }

    #[test]
    fn registration_output_names_the_first_violation() {
        let output = render_check(&CheckCommand::Registration {
            phone: "12345".to_string(),
            password: "short".to_string(),
        });
        assert_eq!(output, "registration: rejected (Please enter a valid phone number.)");

        let output = render_check(&CheckCommand::Registration {
            phone: "+88 017-1234-5678".to_string(),
            password: "Xk7!pQz9".to_string(),
        });
        assert_eq!(output, "registration: valid");
    }
}
