use std::collections::BTreeMap;

use crate::page::CodePage;
use crate::range::HIGH_BYTES;

/// One successfully decoded byte under one code page.
///
/// Produced by the mapping builder, copied into the table, and never
/// mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingEntry {
    /// Byte value in the source code page (always inside [`HIGH_BYTES`]).
    pub source_byte: u8,
    /// Code page the byte was decoded under.
    pub page: CodePage,
    /// Unicode scalar value the byte decodes to.
    pub codepoint: char,
}

impl MappingEntry {
    /// Build an entry for a byte inside the high-ASCII range.
    ///
    /// A source byte outside [`HIGH_BYTES`] is a programming error in
    /// the builder, not a runtime path reachable from input.
    #[must_use]
    pub fn new(source_byte: u8, page: CodePage, codepoint: char) -> Self {
        debug_assert!(
            HIGH_BYTES.contains(source_byte),
            "source byte 0x{source_byte:02X} outside the high-ASCII range"
        );
        Self {
            source_byte,
            page,
            codepoint,
        }
    }
}

/// The merged conversion table, keyed by codepoint in ascending order.
///
/// At most one entry per codepoint: when two pages map different bytes
/// to the same codepoint, the page processed later silently overwrites
/// the earlier one. Collision resolution therefore depends on the
/// order pages are absorbed.
///
/// # Example
/// ```
/// use cpm_core::mapping::{ConversionTable, MappingEntry};
/// use cpm_core::page::CodePage;
///
/// let table = ConversionTable::new()
///     .absorb([MappingEntry::new(0xC1, CodePage::Cp1250, '\u{00C1}')]);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ConversionTable {
    entries: BTreeMap<char, (CodePage, u8)>,
}

impl ConversionTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one builder's output into the table.
    ///
    /// Last writer wins on codepoint collisions; no diagnostic is
    /// emitted. Consumes and returns the table so the caller's
    /// accumulation stays an explicit fold.
    #[must_use]
    pub fn absorb(mut self, entries: impl IntoIterator<Item = MappingEntry>) -> Self {
        for entry in entries {
            self.entries
                .insert(entry.codepoint, (entry.page, entry.source_byte));
        }
        self
    }

    /// Number of distinct codepoints in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(codepoint, page, source_byte)` in ascending codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = (char, CodePage, u8)> + '_ {
        self.entries
            .iter()
            .map(|(&codepoint, &(page, byte))| (codepoint, page, byte))
    }
}
