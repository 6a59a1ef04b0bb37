use std::path::PathBuf;

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Directory holding the CSV exports used by the admin seed operation
    pub seed_dir: PathBuf,
}

impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, seed_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self { db, seed_dir }
    }
}
