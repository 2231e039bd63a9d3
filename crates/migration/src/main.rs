use sea_orm_migration::prelude::*;

/// Provisions a fresh hotel database, e.g. `DATABASE_URL=sqlite://backend/Hotelek.db?mode=rwc migration up`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
