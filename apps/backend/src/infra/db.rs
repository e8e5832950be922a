use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile. Does not run migrations;
/// that is `StateBuilder::build`'s job.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opts = ConnectOptions::new(&url);
    // An in-memory sqlite database exists per connection; a larger pool
    // would hand out empty databases.
    if url.starts_with("sqlite") {
        opts.max_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}
