//! Seeding and query workflows.
//!
//! A workflow is a fixed sequence of store operations executed as one
//! logical unit with guaranteed teardown: each run connects, owns its
//! handle exclusively, and releases it on success, error, and cancellation
//! paths alike (the handle is owned by the workflow frame, so RAII covers
//! the paths an explicit `close()` cannot reach). Workflows emit `tracing`
//! events; they never print.

pub mod query;
pub mod seed;
