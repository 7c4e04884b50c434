//! End-to-end decoding suite: stream fixtures, rendering, and property coverage.

#![allow(clippy::pedantic, clippy::nursery, clippy::cast_possible_truncation)]

use std::collections::VecDeque;
use std::io::{self, Read};

use bootinfo_core::machine::{MACH_AMIGA, MACH_ATARI, MACH_HP300, MACH_MAC, MACH_MVME16X};
use bootinfo_core::tables::amiga::{
    BI_AMIGA_AUTOCON, BI_AMIGA_CHIPSET, BI_AMIGA_CHIP_SIZE, BI_AMIGA_ECLOCK, BI_AMIGA_MODEL,
    BI_AMIGA_PSFREQ, BI_AMIGA_SERPER, BI_AMIGA_VBLANK,
};
use bootinfo_core::tables::atari::BI_ATARI_MCH_COOKIE;
use bootinfo_core::tables::hp300::{BI_HP300_MODEL, BI_HP300_UART_ADDR};
use bootinfo_core::tables::mac::{BI_MAC_MODEL, BI_MAC_VADDR};
use bootinfo_core::tables::vme::{BI_VME_BRDINFO, BI_VME_TYPE};
use bootinfo_core::{
    decode_all, render_record, DecodeError, DecodePhase, ErrorClass, SemanticType, StreamDecoder,
    BI_COMMAND_LINE, BI_CPUTYPE, BI_FPUTYPE, BI_MACHTYPE, BI_MEMCHUNK, BI_MMUTYPE, BI_RAMDISK,
};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

fn unit(tag: u16, payload: &[u8]) -> Vec<u8> {
    let raw_size = u16::try_from(payload.len() + 4).expect("unit fits in 16 bits");
    let mut bytes = Vec::with_capacity(payload.len() + 4);
    bytes.extend_from_slice(&tag.to_be_bytes());
    bytes.extend_from_slice(&raw_size.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn be32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

fn mem_info(addr: u32, size: u32) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    bytes[..4].copy_from_slice(&addr.to_be_bytes());
    bytes[4..].copy_from_slice(&size.to_be_bytes());
    bytes
}

fn padded_string(text: &str) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }
    bytes
}

const SENTINEL: [u8; 2] = [0x00, 0x00];

fn render_stream(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    decode_all(bytes).map(|records| records.iter().map(render_record).collect())
}

#[test]
fn amiga_boot_stream_renders_every_record() {
    let mut autocon = [0u8; 68];
    autocon[17] = 0x0B;
    autocon[20..22].copy_from_slice(&0x0202u16.to_be_bytes());
    autocon[32..36].copy_from_slice(&0x00E9_0000u32.to_be_bytes());

    let mut stream = Vec::new();
    stream.extend(unit(BI_MACHTYPE, &be32(MACH_AMIGA)));
    stream.extend(unit(BI_CPUTYPE, &be32(1 << 2)));
    stream.extend(unit(BI_FPUTYPE, &be32(1 << 2)));
    stream.extend(unit(BI_MMUTYPE, &be32(1 << 2)));
    stream.extend(unit(BI_MEMCHUNK, &mem_info(0x0800_0000, 0x0400_0000)));
    stream.extend(unit(BI_MEMCHUNK, &mem_info(0x0000_0000, 0x0020_0000)));
    stream.extend(unit(BI_RAMDISK, &mem_info(0x0BC0_0000, 0x0040_0000)));
    stream.extend(unit(BI_COMMAND_LINE, &padded_string("root=/dev/sda1 console=ttyS0")));
    stream.extend(unit(BI_AMIGA_MODEL, &be32(11)));
    stream.extend(unit(BI_AMIGA_AUTOCON, &autocon));
    stream.extend(unit(BI_AMIGA_CHIP_SIZE, &be32(0x0020_0000)));
    stream.extend(unit(BI_AMIGA_VBLANK, &[50, 0, 0, 0]));
    stream.extend(unit(BI_AMIGA_PSFREQ, &[50, 0, 0, 0]));
    stream.extend(unit(BI_AMIGA_ECLOCK, &be32(709_379)));
    stream.extend(unit(BI_AMIGA_CHIPSET, &be32(3)));
    stream.extend(unit(BI_AMIGA_SERPER, &[0x01, 0x74, 0, 0]));
    stream.extend_from_slice(&SENTINEL);

    let lines = render_stream(&stream).expect("valid amiga stream");
    assert_eq!(
        lines,
        vec![
            "machtype = amiga",
            "cputype = 68040",
            "fputype = 68040",
            "mmutype = 68040",
            "memchunk of 0x04000000 bytes at 0x08000000",
            "memchunk of 0x00200000 bytes at 0x00000000",
            "ramdisk of 0x00400000 bytes at 0x0bc00000",
            "command_line = \"root=/dev/sda1 console=ttyS0\"",
            "amiga.model = A4000",
            "amiga.autocon board 0x0202:0x0b at 0x00e90000",
            "amiga.chip_size = 0x00200000",
            "amiga.vblank = 50",
            "amiga.psfreq = 50",
            "amiga.eclock = 0x000ad303",
            "amiga.chipset = AGA",
            "amiga.serper = 372",
        ]
    );
}

#[test]
fn machtype_then_sentinel_yields_one_line() {
    let mut stream = unit(BI_MACHTYPE, &be32(MACH_AMIGA));
    stream.extend_from_slice(&SENTINEL);

    let mut decoder = StreamDecoder::new(&stream[..]);
    let record = decoder
        .next_record()
        .expect("machtype decodes")
        .expect("one record");
    assert_eq!(render_record(&record), "machtype = amiga");
    assert!(decoder.next_record().expect("clean end").is_none());
    assert_eq!(decoder.phase(), DecodePhase::Done);
}

#[test]
fn machine_tag_before_detection_is_unresolved() {
    let mut stream = unit(BI_AMIGA_MODEL, &be32(5));
    stream.extend(unit(BI_MACHTYPE, &be32(MACH_AMIGA)));
    stream.extend(unit(BI_AMIGA_MODEL, &be32(5)));

    let records = decode_all(&stream[..]).expect("valid stream");
    assert_eq!(records[0].name, "0x8000");
    assert_eq!(records[0].semantic_type, SemanticType::Unknown);
    assert_eq!(render_record(&records[0]), "0x8000");
    assert_eq!(render_record(&records[2]), "amiga.model = A1200");
}

#[rstest]
#[case(MACH_ATARI, BI_ATARI_MCH_COOKIE, 0x0002_0000, "atari.mch_cookie = TT")]
#[case(MACH_MAC, BI_MAC_MODEL, 35, "mac.model = Mac Q800")]
#[case(MACH_MAC, BI_MAC_VADDR, 0xF900_0000, "mac.vaddr = 0xf9000000")]
#[case(MACH_HP300, BI_HP300_MODEL, 11, "hp300.model = HP9000/425T")]
#[case(MACH_HP300, BI_HP300_UART_ADDR, 0x0041_0000, "hp300.uart_addr = 0x00410000")]
#[case(MACH_MVME16X, BI_VME_TYPE, 0x0167, "mvme16X.type = MVME167")]
fn machine_specific_records_resolve_per_family(
    #[case] machine: u32,
    #[case] tag: u16,
    #[case] value: u32,
    #[case] expected: &str,
) {
    let mut stream = unit(BI_MACHTYPE, &be32(machine));
    stream.extend(unit(tag, &be32(value)));

    let lines = render_stream(&stream).expect("valid stream");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], expected);
}

#[test]
fn vme_board_info_renders_name_only() {
    let mut stream = unit(BI_MACHTYPE, &be32(MACH_MVME16X));
    stream.extend(unit(BI_VME_BRDINFO, &[0x5A; 32]));
    let lines = render_stream(&stream).expect("valid stream");
    assert_eq!(lines[1], "mvme16X.brdinfo");
}

#[test]
fn unknown_generic_tag_renders_as_hex() {
    let stream = unit(0x0042, &[1, 2, 3, 4]);
    let lines = render_stream(&stream).expect("valid stream");
    assert_eq!(lines, vec!["0x0042"]);
}

#[test]
fn unknown_machine_code_renders_hex_value() {
    let mut stream = unit(BI_MACHTYPE, &be32(0x1234));
    stream.extend(unit(BI_AMIGA_MODEL, &be32(1)));
    let lines = render_stream(&stream).expect("valid stream");
    assert_eq!(lines, vec!["machtype = 0x00001234", "0x8000"]);
}

#[test]
fn memory_range_is_not_swapped() {
    let stream = unit(BI_MEMCHUNK, &mem_info(0x0010_0000, 0x0020_0000));
    let lines = render_stream(&stream).expect("valid stream");
    assert_eq!(lines, vec!["memchunk of 0x00200000 bytes at 0x00100000"]);
}

#[test]
fn oversized_payload_is_accepted() {
    let mut payload = be32(1 << 3).to_vec();
    payload.extend_from_slice(&[0xEE; 8]);
    let lines = render_stream(&unit(BI_CPUTYPE, &payload)).expect("padding is ignored");
    assert_eq!(lines, vec!["cputype = 68060"]);
}

#[rstest]
#[case(BI_MACHTYPE, 0)]
#[case(BI_CPUTYPE, 0)]
#[case(BI_MEMCHUNK, 4)]
fn undersized_payload_is_fatal(#[case] tag: u16, #[case] payload_len: usize) {
    let error = decode_all(&unit(tag, &vec![0; payload_len])[..]).expect_err("too small");
    assert_eq!(error.class(), ErrorClass::Content);
    assert_eq!(error.tag(), Some(tag));
}

#[test]
fn undersized_amiga_autocon_is_fatal() {
    let mut stream = unit(BI_MACHTYPE, &be32(MACH_AMIGA));
    stream.extend(unit(BI_AMIGA_AUTOCON, &[0; 64]));
    let error = decode_all(&stream[..]).expect_err("autocon needs 68 bytes");
    let message = error.to_string();
    assert_eq!(message, "Unexpected size 68 for tag amiga.autocon");
}

#[test]
fn unterminated_command_line_is_fatal() {
    let error = decode_all(&unit(BI_COMMAND_LINE, b"init")[..]).expect_err("no terminator");
    let message = error.to_string();
    assert_eq!(message, "Unterminated string for tag command_line");
}

#[test]
fn records_before_a_fatal_error_are_still_produced() {
    let mut stream = unit(BI_CPUTYPE, &be32(1));
    stream.extend_from_slice(&[0x00, 0x03, 0x00, 0x02]);

    let mut decoder = StreamDecoder::new(&stream[..]);
    let results: Vec<_> = decoder.by_ref().collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(DecodeError::InvalidSize {
            tag: 0x0003,
            raw_size: 2
        })
    ));
    assert_eq!(decoder.phase(), DecodePhase::Failed(ErrorClass::Framing));
}

/// Reader that replays a fixed script of chunks and errors, then reports end
/// of file.
struct ScriptedReader {
    script: VecDeque<io::Result<Vec<u8>>>,
}

impl ScriptedReader {
    fn new(script: impl IntoIterator<Item = io::Result<Vec<u8>>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.script.pop_front() {
            None => Ok(0),
            Some(Err(error)) => Err(error),
            Some(Ok(mut chunk)) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.script.push_front(Ok(chunk.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}

fn denied() -> io::Error {
    io::Error::from(io::ErrorKind::PermissionDenied)
}

fn interrupted() -> io::Error {
    io::Error::from(io::ErrorKind::Interrupted)
}

#[test]
fn read_failure_mid_payload_names_the_tag() {
    let reader = ScriptedReader::new([Ok(vec![0x00, 0x02, 0x00, 0x08, 0x00]), Err(denied())]);
    let mut decoder = StreamDecoder::new(reader);

    let error = decoder.next_record().expect_err("payload read fails");
    assert_eq!(error.class(), ErrorClass::Io);
    assert_eq!(error.tag(), Some(BI_CPUTYPE));
    match error {
        DecodeError::Read { tag, source } => {
            assert_eq!(tag, BI_CPUTYPE);
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected a payload read error, got {other:?}"),
    }
    assert_eq!(decoder.phase(), DecodePhase::Failed(ErrorClass::Io));
    assert!(decoder.next_record().expect("failure is latched").is_none());
}

#[test]
fn read_failure_mid_size_names_the_tag() {
    let reader = ScriptedReader::new([Ok(vec![0x80, 0x01, 0x00]), Err(denied())]);

    let error = decode_all(reader).expect_err("size read fails");
    assert!(matches!(error, DecodeError::Read { tag: 0x8001, .. }));
    assert_eq!(error.class(), ErrorClass::Io);
}

#[rstest]
#[case(vec![Err(denied())])]
#[case(vec![Ok(vec![0x00]), Err(denied())])]
fn read_failure_before_a_tag_has_no_tag(#[case] script: Vec<io::Result<Vec<u8>>>) {
    let error = decode_all(ScriptedReader::new(script)).expect_err("tag read fails");
    assert_eq!(error.class(), ErrorClass::Io);
    assert_eq!(error.tag(), None);
    match error {
        DecodeError::ReadTag(source) => {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected a tag read error, got {other:?}"),
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let reader = ScriptedReader::new([
        Err(interrupted()),
        Ok(vec![0x00]),
        Err(interrupted()),
        Ok(vec![0x02, 0x00]),
        Err(interrupted()),
        Ok(vec![0x08, 0x00, 0x00, 0x00, 0x04]),
        Err(interrupted()),
        Ok(SENTINEL.to_vec()),
    ]);
    let mut decoder = StreamDecoder::new(reader);

    let record = decoder.next_record().expect("retried").expect("one record");
    assert_eq!(render_record(&record), "cputype = 68040");
    assert!(decoder.next_record().expect("clean end").is_none());
    assert_eq!(decoder.phase(), DecodePhase::Done);
}

/// Tag/payload pairs that always decode: Unknown-typed tags outside both
/// dictionaries, with 4-byte-aligned payloads.
fn valid_units() -> impl Strategy<Value = Vec<(u16, Vec<u8>)>> {
    let tag = (0x0100u16..0x7FFF).prop_union(0x8100u16..0xFFFF);
    let payload = (0usize..8).prop_flat_map(|words| prop::collection::vec(any::<u8>(), words * 4));
    prop::collection::vec((tag, payload), 0..16)
}

proptest! {
    #[test]
    fn property_line_count_matches_record_count(units in valid_units(), with_sentinel in any::<bool>()) {
        let mut stream = Vec::new();
        for (tag, payload) in &units {
            stream.extend(unit(*tag, payload));
        }
        if with_sentinel {
            stream.extend_from_slice(&SENTINEL);
            stream.extend(unit(0x0100, &[0; 4]));
        }

        let lines = render_stream(&stream).expect("generated stream is valid");
        prop_assert_eq!(lines.len(), units.len());
    }

    #[test]
    fn property_invalid_sizes_abort_before_payload(tag in 1u16..=u16::MAX, raw_size in any::<u16>()) {
        prop_assume!(raw_size < 4 || raw_size % 4 != 0);

        let mut stream = Vec::new();
        stream.extend_from_slice(&tag.to_be_bytes());
        stream.extend_from_slice(&raw_size.to_be_bytes());

        let error = decode_all(&stream[..]).expect_err("framing must fail");
        prop_assert!(
            matches!(error, DecodeError::InvalidSize { tag: t, raw_size: s } if t == tag && s == raw_size),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn property_strings_without_terminator_abort(text in "[a-z=/ ]{1,12}") {
        let mut payload = text.into_bytes();
        while payload.len() % 4 != 0 {
            payload.push(b'x');
        }
        let error = decode_all(&unit(BI_COMMAND_LINE, &payload)[..]).expect_err("unterminated");
        let is_unterminated = matches!(error, DecodeError::UnterminatedString { .. });
        prop_assert!(is_unterminated);
    }

    #[test]
    fn property_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut decoder = StreamDecoder::new(&bytes[..]);
        let mut rendered = 0usize;
        while let Ok(Some(record)) = decoder.next_record() {
            let _ = render_record(&record);
            rendered += 1;
        }
        prop_assert!(decoder.phase().is_terminal());
        prop_assert_eq!(rendered, decoder.records_decoded());
    }
}
