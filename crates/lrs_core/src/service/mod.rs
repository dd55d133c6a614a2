//! Core use-case services.
//!
//! # Responsibility
//! - Convert whole records between xAPI statements and Caliper events.
//! - Orchestrate conversion and repository calls into statement use-cases.
//!
//! # See also
//! - crate::convert for the field-level mapping rules.

pub mod conversion_service;
pub mod statement_service;
