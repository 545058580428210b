//! Read projections for Special Report entities.

use neo4rs::query;

use taxon_core::{labels, AlternativeIdentifiers, IdentifierNamespace, SpecialReport};

use crate::client::GraphError;
use crate::service::SpecialReportsService;

impl SpecialReportsService {
    /// Project the stored entity for a UUID, with its identifiers grouped
    /// back by namespace and its current label set.
    ///
    /// Returns `Ok(None)` when no node with the domain label exists;
    /// not-found is never an error.
    pub async fn read(&self, uuid: &str) -> Result<Option<SpecialReport>, GraphError> {
        let cypher = format!(
            "MATCH (n:{report} {{uuid: $uuid}})
             OPTIONAL MATCH (upp:{upp})-[:IDENTIFIES]->(n)
             OPTIONAL MATCH (tme:{tme})-[:IDENTIFIES]->(n)
             RETURN n.uuid AS uuid, n.prefLabel AS prefLabel, labels(n) AS types,
                    collect(DISTINCT upp.value) AS uppValues,
                    collect(DISTINCT tme.value) AS tmeValues",
            report = labels::SPECIAL_REPORT,
            upp = IdentifierNamespace::Upp.label(),
            tme = IdentifierNamespace::Tme.label(),
        );
        let q = query(&cypher).param("uuid", uuid.to_string());

        match self.client.query_one(q).await? {
            Some(row) => {
                let uuid: String = row
                    .get("uuid")
                    .map_err(|e| GraphError::Serialization(format!("Failed to decode uuid: {e}")))?;
                let pref_label: String = row.get("prefLabel").unwrap_or_default();
                let types: Vec<String> = row.get("types").unwrap_or_default();
                let uuids: Vec<String> = row.get("uppValues").unwrap_or_default();
                let tme: Vec<String> = row.get("tmeValues").unwrap_or_default();

                Ok(Some(SpecialReport {
                    uuid,
                    pref_label,
                    alternative_identifiers: AlternativeIdentifiers { tme, uuids },
                    types,
                }))
            }
            None => Ok(None),
        }
    }

    /// Count the entities currently carrying the domain label.
    pub async fn count(&self) -> Result<i64, GraphError> {
        let cypher = format!(
            "MATCH (n:{report}) RETURN count(n) AS cnt",
            report = labels::SPECIAL_REPORT,
        );

        match self.client.query_one(query(&cypher)).await? {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
