//! MongoDB client factory.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use thiserror::Error;

/// Failure to establish the initial MongoDB session. All driver errors
/// (bad URI, DNS, network, authentication, timeout) surface here as a
/// single kind; callers decide what a failed bootstrap means.
#[derive(Debug, Error)]
#[error("failed to connect to MongoDB: {0}")]
pub struct BootstrapError(#[from] mongodb::error::Error);

/// Open a session to the deployment named by `uri` and return the client
/// handle. The URI is handed to the driver unmodified. One attempt only;
/// no retry.
pub async fn connect(uri: &str) -> Result<Client, BootstrapError> {
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;

    // The driver connects lazily; a ping forces the session open now so an
    // unreachable deployment fails the bootstrap instead of the first query.
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database("admin"));
    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        target: "notes-db",
        database = database.name(),
        "mongodb connection established"
    );

    Ok(client)
}
