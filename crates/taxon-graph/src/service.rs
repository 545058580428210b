//! The Special Reports service: reconciliation facade over the graph client.

use taxon_core::{labels, IdentifierNamespace};

use crate::client::{GraphClient, GraphError};

/// Read/write service for Special Report entities.
///
/// Holds an injected [`GraphClient`]; the client's lifecycle is owned by
/// the caller. All reconciliation statements flow through this service.
#[derive(Clone)]
pub struct SpecialReportsService {
    pub(crate) client: GraphClient,
}

impl SpecialReportsService {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// The underlying graph client.
    pub fn client(&self) -> &GraphClient {
        &self.client
    }

    /// Verify the backing store is reachable.
    pub async fn check(&self) -> Result<(), GraphError> {
        self.client.check().await
    }

    /// Declare uniqueness constraints for every label the service writes.
    ///
    /// Idempotent; intended to run once at startup.
    pub async fn initialise(&self) -> Result<(), GraphError> {
        let constraints = [
            (labels::THING, "uuid"),
            (labels::CONCEPT, "uuid"),
            (labels::CLASSIFICATION, "uuid"),
            (labels::SPECIAL_REPORT, "uuid"),
            (IdentifierNamespace::Tme.label(), "value"),
            (IdentifierNamespace::Upp.label(), "value"),
        ];

        for (label, property) in constraints {
            self.client.ensure_unique_constraint(label, property).await?;
        }
        Ok(())
    }
}
