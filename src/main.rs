use anyhow::Context;

use notes_api::{db, settings::Settings, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load notes-api settings")?;
    telemetry::init(&settings.telemetry)?;

    tracing::info!(env = ?settings.environment, "notes-api bootstrap starting");

    let client = match db::connect(&settings.database.uri).await {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "error connecting to MongoDB");
            std::process::exit(1);
        }
    };

    let database = client.default_database();
    tracing::info!(
        database = database.as_ref().map(|db| db.name()).unwrap_or("admin"),
        "notes-api bootstrap complete"
    );

    Ok(())
}
