use std::io::{self, Write};

use cpm_codec::{decode_byte, Decoded};
use cpm_core::mapping::ConversionTable;

/// Write the human-readable verification report.
///
/// One line per table entry, cross-checking the stored codepoint
/// against a fresh decode of the source byte:
///
/// ```text
/// --- TEST REPORT (2 items) ---
/// 0x00C1 (Á) -> windows-1250/0xc1 (Á)
/// 0x0410 (А) -> windows-1251/0xc0 (А)
/// ```
///
/// # Errors
/// Propagates write failures from the sink.
pub fn write_test_report(table: &ConversionTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "--- TEST REPORT ({} items) ---", table.len())?;
    for (codepoint, page, byte) in table.iter() {
        let read_back = match decode_byte(byte, page) {
            Decoded::Mapped(ch) => ch,
            Decoded::Unmapped => char::REPLACEMENT_CHARACTER,
        };
        writeln!(
            out,
            "0x{:04X} ({codepoint}) -> {page}/0x{byte:x} ({read_back})",
            u32::from(codepoint)
        )?;
    }
    Ok(())
}

/// Write the machine-usable data table.
///
/// One fixed-width literal triple per entry — codepoint, one-byte page
/// identifier, source byte — ready to paste into a static array in
/// downstream source code:
///
/// ```text
/// --- DATA (1 items) ---
/// {0x00C1, 0x00, 0xc1}
/// ```
///
/// # Errors
/// Propagates write failures from the sink.
pub fn write_data_table(table: &ConversionTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "--- DATA ({} items) ---", table.len())?;
    for (codepoint, page, byte) in table.iter() {
        writeln!(
            out,
            "{{0x{:04X}, 0x{:02X}, 0x{byte:02x}}}",
            u32::from(codepoint),
            page.id_byte()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpm_codec::decode_high_range;
    use cpm_core::mapping::MappingEntry;
    use cpm_core::page::CodePage;

    fn render(f: impl Fn(&ConversionTable, &mut Vec<u8>) -> io::Result<()>, table: &ConversionTable) -> String {
        let mut out = Vec::new();
        f(table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_line_shape() {
        let table = ConversionTable::new()
            .absorb([MappingEntry::new(0xC1, CodePage::Cp1250, '\u{00C1}')]);
        let text = render(|t, o| write_test_report(t, o), &table);
        assert_eq!(
            text,
            "--- TEST REPORT (1 items) ---\n0x00C1 (Á) -> windows-1250/0xc1 (Á)\n"
        );
    }

    #[test]
    fn data_table_line_shape() {
        let table = ConversionTable::new()
            .absorb([MappingEntry::new(0xC1, CodePage::Cp1250, '\u{00C1}')]);
        let text = render(|t, o| write_data_table(t, o), &table);
        assert_eq!(text, "--- DATA (1 items) ---\n{0x00C1, 0x00, 0xc1}\n");
    }

    #[test]
    fn two_page_scenario_is_bounded_and_ascending() {
        // cp1250 then cp1251, as on a typical command line.
        let table = ConversionTable::new()
            .absorb(decode_high_range(CodePage::Cp1250))
            .absorb(decode_high_range(CodePage::Cp1251));
        assert!(table.len() <= 254);

        let text = render(|t, o| write_data_table(t, o), &table);
        let codepoints: Vec<u32> = text
            .lines()
            .skip(1)
            .map(|line| u32::from_str_radix(&line[3..7], 16).unwrap())
            .collect();
        assert!(!codepoints.is_empty());
        assert!(codepoints.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn collision_winner_is_the_later_page() {
        // Same codepoint from two pages; the page absorbed second must
        // show up in the triple's identifier byte.
        let table = ConversionTable::new()
            .absorb([MappingEntry::new(0x81, CodePage::Cp1250, '\u{00C1}')])
            .absorb([MappingEntry::new(0x81, CodePage::Cp1251, '\u{00C1}')]);
        let text = render(|t, o| write_data_table(t, o), &table);
        assert!(text.contains("{0x00C1, 0x01, 0x81}"));
    }
}
