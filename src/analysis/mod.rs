//! Analysis and result aggregation modules
//!
//! Combines per-segment features into the final note extraction:
//! - Batch peak estimation across segments
//! - Result types
//! - Metadata
//! - Text reports

pub mod batch;
pub mod metadata;
pub mod report;
pub mod result;
