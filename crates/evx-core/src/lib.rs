//! # evx-core
//!
//! Core types for Evidex.
//!
//! This crate provides the foundational types shared across all Evidex crates:
//! - Entity structs for the stored document types (articles, authors, tags,
//!   systematic reviews, clinical trials)
//! - Draft types with construction-time validation for not-yet-inserted
//!   entities
//! - Outcome and field enums with fallible string parsing
//! - ID prefix constants
//! - Resolved-view types produced by the link resolver
//! - Report types returned by the seeding and query workflows
//! - Cross-cutting validation error type

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod reports;
pub mod resolved;
