use cpm_core::mapping::MappingEntry;
use cpm_core::page::CodePage;
use cpm_core::range::HIGH_BYTES;
use encoding_rs::Encoding;
use log::{info, warn};

/// Outcome of decoding a single byte under a code page.
///
/// The decoder substitutes unmapped bytes with a replacement scalar
/// instead of failing, so one pass over a buffer surfaces failures
/// positionally. The sentinel check lives here and nowhere else.
///
/// Known limitation: a page that genuinely mapped a byte to the
/// replacement character itself would be reported as unmapped. None of
/// the windows-125x pages does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// The byte decodes to this Unicode scalar value.
    Mapped(char),
    /// The page leaves the byte undefined.
    Unmapped,
}

impl Decoded {
    fn from_scalar(ch: char) -> Self {
        if ch == char::REPLACEMENT_CHARACTER {
            Self::Unmapped
        } else {
            Self::Mapped(ch)
        }
    }
}

/// Map a code page to its `encoding_rs` decoder.
fn encoding_for(page: CodePage) -> &'static Encoding {
    match page {
        CodePage::Cp1250 => encoding_rs::WINDOWS_1250,
        CodePage::Cp1251 => encoding_rs::WINDOWS_1251,
        CodePage::Cp1252 => encoding_rs::WINDOWS_1252,
        CodePage::Cp1253 => encoding_rs::WINDOWS_1253,
        CodePage::Cp1254 => encoding_rs::WINDOWS_1254,
        CodePage::Cp1255 => encoding_rs::WINDOWS_1255,
        CodePage::Cp1256 => encoding_rs::WINDOWS_1256,
        CodePage::Cp1257 => encoding_rs::WINDOWS_1257,
        CodePage::Cp1258 => encoding_rs::WINDOWS_1258,
    }
}

/// Decode one byte under one code page.
///
/// Used by the verification report to read each table entry's source
/// byte back and cross-check it against the stored codepoint.
///
/// # Example
/// ```
/// use cpm_codec::{decode_byte, Decoded};
/// use cpm_core::page::CodePage;
///
/// assert_eq!(decode_byte(0xC0, CodePage::Cp1251), Decoded::Mapped('\u{0410}'));
/// assert_eq!(decode_byte(0x81, CodePage::Cp1250), Decoded::Unmapped);
/// ```
#[must_use]
pub fn decode_byte(byte: u8, page: CodePage) -> Decoded {
    let buffer = [byte];
    let (text, _) = encoding_for(page).decode_without_bom_handling(&buffer);
    text.chars().next().map_or(Decoded::Unmapped, Decoded::from_scalar)
}

/// The mapping builder: decode the whole high-ASCII range under `page`.
///
/// Decodes the range as one contiguous buffer. Single-byte encodings
/// decode each byte to exactly one scalar, so output position `i`
/// corresponds to source byte `HIGH_BYTES.first() + i`. Unmapped bytes
/// are logged as warnings and excluded; the returned entries are in
/// ascending source-byte order.
///
/// Stateless: calling it twice for the same page yields identical
/// sequences.
#[must_use]
pub fn decode_high_range(page: CodePage) -> Vec<MappingEntry> {
    info!("Processing {page}...");

    let buffer: Vec<u8> = HIGH_BYTES.bytes().collect();
    let (text, _had_errors) = encoding_for(page).decode_without_bom_handling(&buffer);

    let mut entries = Vec::with_capacity(HIGH_BYTES.len());
    for (i, ch) in text.chars().enumerate() {
        let source_byte = HIGH_BYTES.first() + i as u8;
        match Decoded::from_scalar(ch) {
            Decoded::Mapped(codepoint) => {
                entries.push(MappingEntry::new(source_byte, page, codepoint));
            }
            Decoded::Unmapped => {
                warn!("char 0x{source_byte:02X} has no unicode mapping and will be skipped");
            }
        }
    }
    entries
}
