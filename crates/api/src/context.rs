use larder_auth::Session;
use larder_core::SessionId;

/// Session context for a request.
///
/// This is immutable and must be present for all item/alert/export routes.
/// The domain layer never sees it; the boundary validates it and stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn session_id(&self) -> SessionId {
        self.session.id
    }
}
