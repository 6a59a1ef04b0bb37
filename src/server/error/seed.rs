use std::path::PathBuf;

use thiserror::Error;

/// Failure to read one of the CSV exports.
///
/// The seeder reports these as "nothing to seed"; they never reach a client.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to open seed source {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read a record from seed source {path:?}: {source}")]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
