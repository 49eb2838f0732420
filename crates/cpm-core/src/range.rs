/// The high-ASCII byte range covered by the generated table.
///
/// Legacy Windows code pages agree with ASCII below 0x80; the accented
/// and special characters that need a conversion table all live in
/// 0x81..=0xFF. Fixed for the lifetime of the process.
///
/// # Example
/// ```
/// use cpm_core::range::HIGH_BYTES;
/// assert_eq!(HIGH_BYTES.len(), 127);
/// assert!(HIGH_BYTES.contains(0xC1));
/// assert!(!HIGH_BYTES.contains(0x80));
/// ```
pub const HIGH_BYTES: ByteRange = ByteRange {
    from: 0x81,
    to: 0xFF,
};

/// An immutable inclusive range of single-byte values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteRange {
    from: u8,
    to: u8,
}

impl ByteRange {
    /// Number of byte values in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.to - self.from) as usize + 1
    }

    /// An inclusive range always holds at least one value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lowest byte value in the range.
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.from
    }

    /// Whether `byte` falls inside the range.
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        byte >= self.from && byte <= self.to
    }

    /// Iterate the byte values in ascending order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> {
        self.from..=self.to
    }
}
