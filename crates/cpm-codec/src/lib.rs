/// Decoding layer for cpmap.
///
/// Wraps the `encoding_rs` windows-125x decoders behind an explicit
/// per-byte result type and provides the mapping builder that turns
/// one code page into a sequence of table entries.

pub mod decode;

pub use decode::{decode_byte, decode_high_range, Decoded};
