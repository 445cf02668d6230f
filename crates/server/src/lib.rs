use db::DBService;

pub mod error;
pub mod file_logging;
pub mod routes;

/// Shared handler state. Owns the store client handle; constructed once in
/// `main` and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }
}
