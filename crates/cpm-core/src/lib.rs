/// Data model and shared types for cpmap.
///
/// This crate contains the fixed byte range, the code page registry,
/// the mapping entry / conversion table types, and the error type
/// used across the cpmap workspace.

pub mod error;
pub mod mapping;
pub mod page;
pub mod range;

pub use error::CpmError;
pub use mapping::{ConversionTable, MappingEntry};
pub use page::CodePage;
pub use range::{ByteRange, HIGH_BYTES};
