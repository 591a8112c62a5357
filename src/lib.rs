//! Box-to-field mapping for scanned-document OCR output.
//!
//! Given the text boxes an OCR engine detected on a document page (polygon,
//! recognized text, confidence), this crate assigns each box to a named
//! structured field ("firstName", "email", ...) under one of two policies:
//!
//! - **Sequential**: boxes in reading order are matched index-by-index
//!   against an ordered field list.
//! - **Positional**: each box is placed into the first configured page region
//!   that contains its normalized center.
//!
//! The OCR engine itself is an external collaborator; the crate only consumes
//! its output shape ([`processors::RawDetection`]) and stays pure in-memory
//! computation, so pages can be mapped in parallel without synchronization.
//!
//! # Example
//!
//! ```
//! use ocr_fieldmap::core::config::MappingSchema;
//! use ocr_fieldmap::mapper::FieldMapper;
//! use ocr_fieldmap::processors::{BoundingBox, TextBox};
//!
//! let schema = MappingSchema {
//!     mode: "sequential".to_string(),
//!     sequential_fields: vec!["name".to_string(), "email".to_string()],
//!     ..MappingSchema::default()
//! };
//!
//! let boxes = vec![
//!     TextBox::new(BoundingBox::from_coords(10.0, 10.0, 90.0, 30.0), "Alice", 0.9).unwrap(),
//!     TextBox::new(BoundingBox::from_coords(10.0, 50.0, 90.0, 70.0), "a@x.com", 0.8).unwrap(),
//! ];
//!
//! let mapper = FieldMapper::new(schema);
//! let result = mapper.map(&boxes, None, None).unwrap();
//! assert_eq!(result.mapped_fields, 2);
//! ```

pub mod core;
pub mod mapper;
pub mod pipeline;
pub mod processors;
pub mod utils;

pub use crate::core::config::{MappingSchema, PipelineConfig, Region};
pub use crate::core::errors::FieldMapError;
pub use crate::mapper::{FieldAssignment, FieldMapper, MappingMode, MappingResult, UnmappedBox};
pub use crate::pipeline::{DocumentResult, PageResult};
pub use crate::processors::{BoundingBox, BoxPosition, Point, RawDetection, TextBox};
