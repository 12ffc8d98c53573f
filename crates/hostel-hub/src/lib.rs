//! Core rules for the student-hostel marketplace: which broadcast notices a
//! viewer sees, whether phone and password credentials pass policy, and which
//! role-gated routes a session may enter.

pub mod config;
pub mod credentials;
pub mod error;
pub mod notices;
pub mod session;
pub mod telemetry;

pub use session::Role;
