//! JSON decoding for the external Special Report wire shape.

use crate::types::SpecialReport;

/// Decode a JSON payload into an entity, returning the entity together with
/// its UUID so a transport layer can match it against a path parameter.
pub fn decode(payload: &[u8]) -> Result<(SpecialReport, String), serde_json::Error> {
    let report: SpecialReport = serde_json::from_slice(payload)?;
    let uuid = report.uuid.clone();
    Ok((report, uuid))
}
