//! Schema CLI, e.g. `cargo run -p migration -- up`.
//!
//! Connects with `DATABASE_URL` (or `-u <url>`); the `DB_*` parts read by the
//! service are not assembled here.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    cli::run_cli(migration::Migrator).await;
}
