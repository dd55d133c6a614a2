//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define tenant-scoped event storage contracts.
//! - Keep storage details out of conversion and service orchestration.
//!
//! # Invariants
//! - Repositories store Caliper events only; statements are always converted
//!   before they reach this layer.
//! - Repository APIs return semantic errors (`InvalidTenant`, `InvalidEvent`)
//!   instead of silently dropping writes.

pub mod event_repo;
