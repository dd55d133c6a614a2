//! Wire-level data model for both interoperability formats.
//!
//! # Responsibility
//! - Define the xAPI statement shape accepted from experience-tracking clients.
//! - Define the Caliper event shape exposed to learning-analytics consumers.
//!
//! # Invariants
//! - Every record is a plain value; conversion never mutates its input.
//! - Field names follow each format's published JSON schema.

pub mod event;
pub mod statement;
