//! Connection lifecycle for the MongoDB document store.
//!
//! # Design
//! A `MongoStore` only exists after `connect` succeeds, so there is no
//! "handle requested before connect" state to check at runtime. `close`
//! consumes the store; the repositories built from it hold their own
//! collection handles and must be dropped first.

use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use thiserror::Error;

/// Failures surfaced by the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// `insert_one` reported an `_id` that is not an ObjectId.
    #[error("unexpected inserted id: {0}")]
    UnexpectedInsertedId(String),

    /// A stored document came back without an `_id`.
    #[error("document without _id in collection {0}")]
    MissingId(String),
}

/// An open connection to one database.
///
/// Not `Clone`: `close` shuts down the client every handle shares.
///
/// ```compile_fail
/// fn cloneable<T: Clone>() {}
/// cloneable::<todo_server::MongoStore>();
/// ```
#[derive(Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect to `uri` and select `database_name`.
    ///
    /// Issues a `ping` so an unreachable server fails here rather than on the
    /// first request.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database_name);
        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = database_name, "connected to document store");
        Ok(Self { client, database })
    }

    pub fn handle(&self) -> &Database {
        &self.database
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("document store connection closed");
    }
}
