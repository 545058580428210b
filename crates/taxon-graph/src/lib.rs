//! Taxon Graph — Neo4j read/write layer for Special Report entities.
//!
//! This crate is the single mutation point for Special Reports in the
//! property graph. Every write is a full replacement reconciliation: the
//! stored state for a UUID is made to match the supplied entity exactly,
//! including the removal of stale identifier nodes and relationships.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod service;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use service::SpecialReportsService;
