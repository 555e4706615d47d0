use storage::Database;

use crate::mailer::Mailer;

/// Shared application state handed to every handler. The database pool
/// is cloned per request from here rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub mailer: Mailer,
}
