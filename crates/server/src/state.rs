use std::sync::Arc;

use service::repository::{AttendantRepository, ProductRepository};

/// Shared handler state. Repositories are held behind trait objects so the
/// SeaORM and in-memory backends are interchangeable.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<dyn ProductRepository>,
    pub attendants: Arc<dyn AttendantRepository>,
}
