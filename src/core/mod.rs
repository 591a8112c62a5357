//! Core types for the field-mapping pipeline: errors and configuration.

pub mod config;
pub mod errors;

pub use config::{MappingSchema, PipelineConfig, Region};
pub use errors::FieldMapError;
