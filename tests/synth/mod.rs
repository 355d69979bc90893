//! Synthesis tests
//!
//! End-to-end from declaration source to generated text:
//! - Inheritance scenarios (simple, multiple, diamond, cycle)
//! - Output shape (naming, record vs. class, positional records)
//! - Import closure and type rendering
//! - Batch ordering and cancellation

pub mod tests_batch;
pub mod tests_output_shape;
pub mod tests_scenarios;
