use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotsync_api::config::ApiConfig;
use slotsync_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    // Connect and make sure the schema exists before serving traffic.
    let db_pool = create_pool(&config.database_url).await?;
    initialize_database(&db_pool).await?;

    slotsync_api::start_server(config, db_pool).await
}
