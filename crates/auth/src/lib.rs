//! `larder-auth` — the session gate.
//!
//! This crate is intentionally decoupled from HTTP and storage: it checks
//! credentials and owns explicit session objects, nothing else.

pub mod credentials;
pub mod session;

pub use credentials::{Credentials, CredentialsError};
pub use session::{Session, SessionError, SessionStore};
