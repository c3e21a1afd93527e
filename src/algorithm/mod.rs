//! Algorithm implementations for synthetic ED data
//!
//! Sampling primitives, the record generators built on them, and the
//! descriptive summaries computed over the generated tables.

pub mod generation;
pub mod sampling;
pub mod summary;
