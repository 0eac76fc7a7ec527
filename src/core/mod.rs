//! Core domain models for vocab-rs.
//!
//! This module contains the data structures that flow through the
//! vocabulary pipeline: token batches produced per document and the
//! frequency records kept in storage. These are pure domain models with
//! no I/O dependencies.

pub mod batch;
pub mod record;

pub use batch::TokenBatch;
pub use record::FrequencyRecord;
