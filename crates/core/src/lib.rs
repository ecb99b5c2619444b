//! Core domain model for the matcat material catalog.
//!
//! Defines the four-level catalog hierarchy (library → bank → sub-bank →
//! material) with its detail records, field-level input validation, and
//! the pure hierarchy-composition helpers behind the dependent-select
//! workflow.  No I/O lives here; the HTTP repository client builds on
//! top of this crate.

pub mod bank;
pub mod detail;
pub mod error;
pub mod hierarchy;
pub mod library;
pub mod material;
pub mod selection;
pub mod sub_bank;
pub mod types;
