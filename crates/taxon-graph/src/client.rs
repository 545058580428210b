//! Neo4j connection management and the shared graph client.

use neo4rs::{query, ConfigBuilder, Graph, Query};
use serde::Deserialize;

use taxon_core::ValidationError;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("invalid entity: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("result decoding error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
///
/// Loaded from `TAXON_`-prefixed environment variables or built directly;
/// every field has a local-development default.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "taxon-dev".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl GraphConfig {
    /// Load configuration from `TAXON_`-prefixed environment variables,
    /// e.g. `TAXON_URI`, falling back to defaults for unset fields.
    pub fn from_env() -> Result<Self, GraphError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("TAXON").separator("__"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| GraphError::Config(e.to_string()))
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Owned by the caller and injected into services at construction.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a write-only query (CREATE, MERGE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute an ordered batch of statements in one explicit transaction.
    ///
    /// Either every statement commits or none does; a failure anywhere
    /// rolls the whole batch back at the store.
    pub async fn execute_batch(
        &self,
        statements: impl IntoIterator<Item = Query>,
    ) -> Result<(), GraphError> {
        let mut txn = self.graph.start_txn().await?;
        txn.run_queries(statements).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }

    /// Begin a transaction.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }

    /// Verify the store is reachable by round-tripping a trivial query.
    pub async fn check(&self) -> Result<(), GraphError> {
        self.query_one(query("RETURN 1 AS ok")).await?;
        Ok(())
    }

    /// Declare a uniqueness constraint on `(label, property)`.
    ///
    /// Idempotent; safe to call on every startup. Constraint DDL cannot run
    /// inside a transaction, so this issues a standalone statement.
    pub async fn ensure_unique_constraint(
        &self,
        label: &str,
        property: &str,
    ) -> Result<(), GraphError> {
        let cypher = format!(
            "CREATE CONSTRAINT IF NOT EXISTS FOR (n:{label}) REQUIRE n.{property} IS UNIQUE"
        );
        self.run(query(&cypher)).await
    }
}
