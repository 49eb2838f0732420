use std::fmt;

use crate::error::CpmError;

/// A legacy single-byte Windows code page from the windows-125x family.
///
/// Identifiers are resolved through an explicit registry instead of
/// being derived from a name fragment, so the one-byte page identifier
/// emitted in the data table is a validated per-page constant.
///
/// # Example
/// ```
/// use cpm_core::page::CodePage;
/// let page = CodePage::from_identifier("cp1250").unwrap();
/// assert_eq!(page, CodePage::Cp1250);
/// assert_eq!(page.name(), "windows-1250");
/// assert_eq!(page.id_byte(), 0);
/// assert!(CodePage::from_identifier("cp9999").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodePage {
    /// Central European.
    Cp1250,
    /// Cyrillic.
    Cp1251,
    /// Western European.
    Cp1252,
    /// Greek.
    Cp1253,
    /// Turkish.
    Cp1254,
    /// Hebrew.
    Cp1255,
    /// Arabic.
    Cp1256,
    /// Baltic.
    Cp1257,
    /// Vietnamese.
    Cp1258,
}

impl CodePage {
    /// Resolve a command-line identifier of the form `cpXXXX`.
    ///
    /// # Errors
    /// [`CpmError::Malformed`] if the identifier is not `cp` followed by
    /// exactly four ASCII digits; [`CpmError::Unsupported`] if it is
    /// well-formed but names a page outside windows-1250..=1258.
    pub fn from_identifier(identifier: &str) -> Result<Self, CpmError> {
        let digits = identifier.strip_prefix("cp").ok_or_else(|| CpmError::Malformed {
            identifier: identifier.to_string(),
        })?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpmError::Malformed {
                identifier: identifier.to_string(),
            });
        }
        match digits {
            "1250" => Ok(Self::Cp1250),
            "1251" => Ok(Self::Cp1251),
            "1252" => Ok(Self::Cp1252),
            "1253" => Ok(Self::Cp1253),
            "1254" => Ok(Self::Cp1254),
            "1255" => Ok(Self::Cp1255),
            "1256" => Ok(Self::Cp1256),
            "1257" => Ok(Self::Cp1257),
            "1258" => Ok(Self::Cp1258),
            _ => Err(CpmError::Unsupported {
                identifier: identifier.to_string(),
            }),
        }
    }

    /// Canonical display name, as used in the verification report.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cp1250 => "windows-1250",
            Self::Cp1251 => "windows-1251",
            Self::Cp1252 => "windows-1252",
            Self::Cp1253 => "windows-1253",
            Self::Cp1254 => "windows-1254",
            Self::Cp1255 => "windows-1255",
            Self::Cp1256 => "windows-1256",
            Self::Cp1257 => "windows-1257",
            Self::Cp1258 => "windows-1258",
        }
    }

    /// One-byte page identifier stored in the data table.
    ///
    /// The trailing digit of the page number: 0 for windows-1250 up to
    /// 8 for windows-1258. Distinct within the supported family.
    #[must_use]
    pub const fn id_byte(self) -> u8 {
        match self {
            Self::Cp1250 => 0,
            Self::Cp1251 => 1,
            Self::Cp1252 => 2,
            Self::Cp1253 => 3,
            Self::Cp1254 => 4,
            Self::Cp1255 => 5,
            Self::Cp1256 => 6,
            Self::Cp1257 => 7,
            Self::Cp1258 => 8,
        }
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_whole_family() {
        for (digit, page) in [
            (0, CodePage::Cp1250),
            (1, CodePage::Cp1251),
            (2, CodePage::Cp1252),
            (3, CodePage::Cp1253),
            (4, CodePage::Cp1254),
            (5, CodePage::Cp1255),
            (6, CodePage::Cp1256),
            (7, CodePage::Cp1257),
            (8, CodePage::Cp1258),
        ] {
            let identifier = format!("cp125{digit}");
            assert_eq!(CodePage::from_identifier(&identifier).unwrap(), page);
            assert_eq!(page.id_byte(), digit);
        }
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for bad in ["1250", "cp125", "cp12500", "windows-1250", "cpabcd", "CP1250", ""] {
            assert!(matches!(
                CodePage::from_identifier(bad),
                Err(CpmError::Malformed { .. })
            ));
        }
    }

    #[test]
    fn rejects_unsupported_pages() {
        for bad in ["cp9999", "cp0437", "cp1259", "cp1249"] {
            assert!(matches!(
                CodePage::from_identifier(bad),
                Err(CpmError::Unsupported { .. })
            ));
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(CodePage::Cp1251.to_string(), "windows-1251");
    }
}
