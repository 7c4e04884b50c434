//! One-line text rendering of classified records.

use std::fmt;

use crate::value::{read_be16, read_be32};
use crate::{Record, SemanticType};

/// Offset of the manufacturer ID in `struct ConfigDev`.
pub const CONFIG_DEV_MANUFACTURER_OFFSET: usize = 20;
/// Offset of the product ID in `struct ConfigDev`.
pub const CONFIG_DEV_PRODUCT_OFFSET: usize = 17;
/// Offset of the board address in `struct ConfigDev`.
pub const CONFIG_DEV_BOARD_ADDR_OFFSET: usize = 32;

/// Writes the display line for `record`, without a trailing newline.
///
/// A payload shorter than its type requires never passes validation; such
/// a record is rendered by name only.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_record(f: &mut impl fmt::Write, record: &Record) -> fmt::Result {
    let name = &record.name;
    let payload = &record.payload[..];

    if !record.semantic_type.accepts_len(payload.len()) {
        return write!(f, "{name}");
    }

    match record.semantic_type {
        SemanticType::Unknown | SemanticType::BoardInfo => write!(f, "{name}"),
        SemanticType::U8 => write!(f, "{name} = {}", payload[0]),
        SemanticType::Be16 => write!(f, "{name} = {}", read_be16(payload)),
        SemanticType::Be32 => match record.description {
            Some(label) => write!(f, "{name} = {label}"),
            None => write!(f, "{name} = 0x{:08x}", read_be32(payload)),
        },
        SemanticType::String => write!(
            f,
            "{name} = \"{}\"",
            String::from_utf8_lossy(record.payload_str_bytes())
        ),
        SemanticType::MemoryRange => write!(
            f,
            "{name} of 0x{:08x} bytes at 0x{:08x}",
            read_be32(&payload[4..]),
            read_be32(payload)
        ),
        SemanticType::ConfigDescriptor => write!(
            f,
            "{name} board 0x{:04x}:0x{:02x} at 0x{:08x}",
            read_be16(&payload[CONFIG_DEV_MANUFACTURER_OFFSET..]),
            payload[CONFIG_DEV_PRODUCT_OFFSET],
            read_be32(&payload[CONFIG_DEV_BOARD_ADDR_OFFSET..])
        ),
    }
}

/// Renders `record` as its display line.
#[must_use]
pub fn render_record(record: &Record) -> String {
    record.to_string()
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::render_record;
    use crate::{Record, SemanticType};

    fn record(
        name: &str,
        semantic_type: SemanticType,
        payload: &[u8],
        description: Option<&'static str>,
    ) -> Record {
        Record {
            tag: 0x0001,
            payload: payload.to_vec(),
            semantic_type,
            name: name.to_string(),
            description,
        }
    }

    #[rstest]
    #[case(SemanticType::Unknown, &[], None, "0x0042")]
    #[case(SemanticType::U8, &[50, 0, 0, 0], None, "0x0042 = 50")]
    #[case(SemanticType::Be16, &[0x01, 0x74, 0, 0], None, "0x0042 = 372")]
    #[case(SemanticType::Be32, &[0, 0, 2, 0], None, "0x0042 = 0x00000200")]
    #[case(SemanticType::Be32, &[0, 0, 0, 4], Some("68040"), "0x0042 = 68040")]
    #[case(SemanticType::String, b"hda1\0\0\0\0", None, "0x0042 = \"hda1\"")]
    #[case(SemanticType::BoardInfo, &[0; 32], None, "0x0042")]
    fn renders_each_type(
        #[case] semantic_type: SemanticType,
        #[case] payload: &[u8],
        #[case] description: Option<&'static str>,
        #[case] expected: &str,
    ) {
        let line = render_record(&record("0x0042", semantic_type, payload, description));
        assert_eq!(line, expected);
    }

    #[test]
    fn memory_range_shows_size_then_address() {
        let payload = [0x00, 0x10, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00];
        let line = render_record(&record(
            "memchunk",
            SemanticType::MemoryRange,
            &payload,
            None,
        ));
        assert_eq!(line, "memchunk of 0x00200000 bytes at 0x00100000");
    }

    #[test]
    fn config_descriptor_shows_board_ids_and_address() {
        let mut payload = [0u8; 68];
        payload[17] = 0x0B;
        payload[20..22].copy_from_slice(&0x0202u16.to_be_bytes());
        payload[32..36].copy_from_slice(&0x00E9_0000u32.to_be_bytes());
        let line = render_record(&record(
            "amiga.autocon",
            SemanticType::ConfigDescriptor,
            &payload,
            None,
        ));
        assert_eq!(line, "amiga.autocon board 0x0202:0x0b at 0x00e90000");
    }

    #[test]
    fn non_utf8_strings_are_rendered_lossily() {
        let line = render_record(&record(
            "command_line",
            SemanticType::String,
            &[b'a', 0xFF, b'b', 0],
            None,
        ));
        assert_eq!(line, "command_line = \"a\u{FFFD}b\"");
    }

    #[rstest]
    #[case(SemanticType::U8, &[])]
    #[case(SemanticType::Be16, &[0x01])]
    #[case(SemanticType::Be32, &[0, 0, 0])]
    #[case(SemanticType::MemoryRange, &[0, 0, 0, 1])]
    #[case(SemanticType::ConfigDescriptor, &[0; 36])]
    fn short_payloads_render_name_only(
        #[case] semantic_type: SemanticType,
        #[case] payload: &[u8],
    ) {
        let line = render_record(&record("truncated", semantic_type, payload, Some("68040")));
        assert_eq!(line, "truncated");
    }

    #[test]
    fn display_matches_render() {
        let record = record("vblank", SemanticType::U8, &[60, 0, 0, 0], None);
        assert_eq!(format!("{record}"), render_record(&record));
    }
}
