//! Write and delete reconciliation for Special Report entities.
//!
//! A write is a full replacement: the stored graph state for a UUID is made
//! to equal the supplied entity, never merged with it. Each operation is
//! submitted as one explicit transaction so a mid-batch failure can never
//! leave identifiers purged but the entity not yet rewritten.

use neo4rs::{query, Query};

use taxon_core::{labels, IdentifierNamespace, SpecialReport};

use crate::client::GraphError;
use crate::service::SpecialReportsService;

impl SpecialReportsService {
    /// Reconcile the graph state for `report.uuid` to equal `report`.
    ///
    /// Statement order matters: prior identifier nodes are purged
    /// unconditionally before the entity upsert, so a rename or removal
    /// can never leave a stale identifier behind.
    pub async fn write(&self, report: &SpecialReport) -> Result<(), GraphError> {
        report.validate()?;

        let mut batch = vec![
            purge_identifiers(&report.uuid),
            upsert_entity(report),
        ];

        for value in &report.alternative_identifiers.tme {
            batch.push(attach_identifier(&report.uuid, IdentifierNamespace::Tme, value));
        }
        for value in &report.alternative_identifiers.uuids {
            batch.push(attach_identifier(&report.uuid, IdentifierNamespace::Upp, value));
        }

        self.client.execute_batch(batch).await?;
        tracing::debug!(uuid = %report.uuid, "wrote special report");
        Ok(())
    }

    /// Strip the entity's domain identity and purge its identifier nodes,
    /// then physically remove the node if nothing else references it.
    ///
    /// Returns whether a delete occurred. The signal is the number of type
    /// labels stripped in the first statement, not whether the node was
    /// physically removed: deleting a never-labeled bare stub reports
    /// `false` even when node removal executes.
    pub async fn delete(&self, uuid: &str) -> Result<bool, GraphError> {
        let mut txn = self.client.start_txn().await?;

        let mut labels_removed: i64 = 0;
        let mut stream = txn.execute(clear_entity(uuid)).await?;
        while let Some(row) = stream.next(txn.handle()).await? {
            labels_removed = row.get("labelsRemoved").unwrap_or(0);
        }

        txn.run(remove_if_disconnected(uuid)).await?;
        txn.commit().await?;

        let deleted = labels_removed > 0;
        tracing::debug!(uuid = %uuid, deleted, "deleted special report");
        Ok(deleted)
    }
}

// ── Statement Builders ────────────────────────────────────────────

/// Delete every identifier node pointing at the UUID, and the IDENTIFIES
/// relationships themselves, regardless of whether the new write recreates
/// equivalent identifiers.
fn purge_identifiers(uuid: &str) -> Query {
    let cypher = format!(
        "MATCH (t:{thing} {{uuid: $uuid}})
         OPTIONAL MATCH (t)<-[iden:IDENTIFIES]-(i)
         DELETE iden, i",
        thing = labels::THING,
    );
    query(&cypher).param("uuid", uuid.to_string())
}

/// Match-or-create the entity node by UUID, replace its whole property map,
/// and apply the full label taxonomy.
fn upsert_entity(report: &SpecialReport) -> Query {
    let cypher = format!(
        "MERGE (n:{thing} {{uuid: $uuid}})
         SET n = {{uuid: $uuid, prefLabel: $prefLabel}}
         SET n:{concept}:{classification}:{report}",
        thing = labels::THING,
        concept = labels::CONCEPT,
        classification = labels::CLASSIFICATION,
        report = labels::SPECIAL_REPORT,
    );
    query(&cypher)
        .param("uuid", report.uuid.to_string())
        .param("prefLabel", report.pref_label.to_string())
}

/// Create a fresh identifier node for one (namespace, value) pair and link
/// it to the entity. The entity side is a MERGE on UUID so repeated writes
/// never duplicate the entity node; identifier nodes are not deduplicated
/// because the purge statement always clears prior ones first.
fn attach_identifier(uuid: &str, namespace: IdentifierNamespace, value: &str) -> Query {
    let cypher = format!(
        "MERGE (t:{thing} {{uuid: $uuid}})
         CREATE (i:{identifier}:{namespace} {{value: $value}})
         MERGE (t)<-[:IDENTIFIES]-(i)",
        thing = labels::THING,
        identifier = labels::IDENTIFIER,
        namespace = namespace.label(),
    );
    query(&cypher)
        .param("uuid", uuid.to_string())
        .param("value", value.to_string())
}

/// Strip the domain type labels, purge identifier nodes and relationships,
/// and reset the node's properties to only the UUID.
///
/// Returns the number of type labels that were present before stripping,
/// standing in for the store's labels-removed counter: it drives the
/// "found and deleted" result.
fn clear_entity(uuid: &str) -> Query {
    let type_list = labels::TYPE_LABELS
        .iter()
        .map(|l| format!("'{l}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let cypher = format!(
        "MATCH (t:{thing} {{uuid: $uuid}})
         WITH t, size([l IN labels(t) WHERE l IN [{type_list}]]) AS typeLabels
         OPTIONAL MATCH (t)<-[iden:IDENTIFIES]-(i:{identifier})
         REMOVE t:{concept}:{classification}:{report}
         DELETE iden, i
         SET t = {{uuid: $uuid}}
         RETURN DISTINCT typeLabels AS labelsRemoved",
        thing = labels::THING,
        identifier = labels::IDENTIFIER,
        concept = labels::CONCEPT,
        classification = labels::CLASSIFICATION,
        report = labels::SPECIAL_REPORT,
    );
    query(&cypher).param("uuid", uuid.to_string())
}

/// Physically delete the node only if it has zero remaining relationships
/// of any kind; a node still referenced by unrelated entities survives as
/// an untyped stub.
fn remove_if_disconnected(uuid: &str) -> Query {
    let cypher = format!(
        "MATCH (t:{thing} {{uuid: $uuid}})
         WHERE NOT (t)--()
         DELETE t",
        thing = labels::THING,
    );
    query(&cypher).param("uuid", uuid.to_string())
}
