//! Bootinfo stream decoder.
//!
//! The stream is a sequence of TLV units: a big-endian 16-bit tag, a
//! big-endian 16-bit total size (header included, multiple of 4, at least
//! 4), then `size - 4` payload bytes. Physical end of file before a tag or
//! the [`BI_LAST`] tag ends the stream cleanly. Any other malformation is
//! fatal and latches the decoder in [`DecodePhase::Failed`].
//!
//! The generic machtype record selects the machine family whose dictionary
//! resolves every later machine-specific tag. Detection only ever affects
//! records that follow it.

use std::borrow::Cow;
use std::io::{self, Read};

use crate::dictionary::{resolve_tag, RecordDictionary, TagSpace, BI_LAST, BI_MACHTYPE};
use crate::machine::{find_machine, MachineDescriptor};
use crate::tables::lookup;
use crate::trace::{DecodeEvent, NullTrace, TraceSink};
use crate::value::{read_be16, read_be32_at};
use crate::{DecodeError, ErrorClass, Record, SemanticType};

/// Size of the tag and size fields preceding every payload.
pub const HEADER_BYTES: usize = 4;

/// Machine name reported before any machtype record matched.
pub const FALLBACK_MACHINE_NAME: &str = "0";

// Total unit size: header included, 4-byte aligned.
const fn is_valid_raw_size(raw_size: u16) -> bool {
    raw_size as usize >= HEADER_BYTES && raw_size.is_multiple_of(4)
}

/// Decode state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePhase {
    /// Next read is a unit tag; end of file here is a clean end.
    #[default]
    AwaitingTag,
    /// Tag read, size field pending.
    AwaitingSize {
        /// Tag of the current unit.
        tag: u16,
    },
    /// Framing validated, payload pending.
    AwaitingPayload {
        /// Tag of the current unit.
        tag: u16,
        /// Total unit size including the header.
        raw_size: u16,
    },
    /// Clean end of stream.
    Done,
    /// A fatal error was reported; nothing further is decoded.
    Failed(ErrorClass),
}

impl DecodePhase {
    /// Returns true once no further records can be produced.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

/// Machine detection state threaded through every decode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderState {
    machine_code: u32,
    machine: Option<&'static MachineDescriptor>,
}

impl DecoderState {
    /// Creates a state with no machine detected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            machine_code: 0,
            machine: None,
        }
    }

    /// Last machtype code seen, matched or not.
    #[must_use]
    pub const fn machine_code(&self) -> u32 {
        self.machine_code
    }

    /// Detected machine family, if any.
    #[must_use]
    pub const fn machine(&self) -> Option<&'static MachineDescriptor> {
        self.machine
    }

    /// Detected machine name, or [`FALLBACK_MACHINE_NAME`].
    #[must_use]
    pub fn machine_name(&self) -> &'static str {
        self.machine
            .map_or(FALLBACK_MACHINE_NAME, |machine| machine.name)
    }

    /// Dictionary for machine-specific tags, if the detected family has one.
    #[must_use]
    pub fn machine_records(&self) -> Option<&'static RecordDictionary> {
        self.machine.and_then(|machine| machine.records)
    }

    /// Applies a machtype code. An unknown code leaves the previously
    /// detected machine in place.
    pub fn detect(&mut self, code: u32) -> Option<&'static MachineDescriptor> {
        self.machine_code = code;
        let machine = find_machine(code)?;
        self.machine = Some(machine);
        Some(machine)
    }

    /// Resolves and names one unit. Machtype units update the state first.
    pub fn classify<S: TraceSink>(&mut self, tag: u16, payload: Vec<u8>, trace: &mut S) -> Record {
        let value = read_be32_at(&payload, 0);
        let mut description = None;

        if tag == BI_MACHTYPE {
            if let Some(code) = value {
                match self.detect(code) {
                    Some(machine) => {
                        description = Some(machine.name);
                        trace.on_event(DecodeEvent::MachineDetected {
                            code,
                            name: machine.name,
                        });
                    }
                    None => trace.on_event(DecodeEvent::UnknownMachine { code }),
                }
            }
        }

        let definition = resolve_tag(tag, self.machine_records());
        let (base_name, semantic_type) = definition.map_or_else(
            || (Cow::Owned(format!("0x{tag:04x}")), SemanticType::Unknown),
            |definition| {
                if let (Some(table), Some(value)) = (definition.lookup, value) {
                    if let Some(label) = lookup(table, value) {
                        description = Some(label);
                    }
                }
                (Cow::Borrowed(definition.name), definition.semantic_type)
            },
        );

        let name = match (TagSpace::of(tag), self.machine) {
            (TagSpace::Machine, Some(machine)) => format!("{}.{base_name}", machine.name),
            _ => base_name.into_owned(),
        };

        Record {
            tag,
            payload,
            semantic_type,
            name,
            description,
        }
    }
}

/// Checks a classified record against its resolved type.
///
/// Strings must be zero-terminated within the payload; every other type
/// needs at least its fixed width. Extra trailing bytes are accepted.
///
/// # Errors
///
/// Returns [`DecodeError::UnterminatedString`] or
/// [`DecodeError::UnexpectedSize`].
pub fn validate_record(record: &Record) -> Result<(), DecodeError> {
    match record.semantic_type {
        SemanticType::String => {
            if record.payload.contains(&0) {
                Ok(())
            } else {
                Err(DecodeError::UnterminatedString {
                    tag: record.tag,
                    name: record.name.clone(),
                })
            }
        }
        kind => {
            if kind.accepts_len(record.payload.len()) {
                Ok(())
            } else {
                Err(DecodeError::UnexpectedSize {
                    tag: record.tag,
                    name: record.name.clone(),
                    raw_size: u16::try_from(record.raw_size()).unwrap_or(u16::MAX),
                })
            }
        }
    }
}

/// Pull decoder over a bootinfo byte stream.
#[derive(Debug)]
pub struct StreamDecoder<R, S = NullTrace> {
    reader: R,
    state: DecoderState,
    phase: DecodePhase,
    trace: S,
    records_decoded: usize,
}

impl<R: Read> StreamDecoder<R> {
    /// Creates a decoder without trace hooks.
    pub const fn new(reader: R) -> Self {
        Self::with_trace(reader, NullTrace)
    }
}

impl<R, S> StreamDecoder<R, S> {
    /// Creates a decoder that reports events to `trace`.
    pub const fn with_trace(reader: R, trace: S) -> Self {
        Self {
            reader,
            state: DecoderState::new(),
            phase: DecodePhase::AwaitingTag,
            trace,
            records_decoded: 0,
        }
    }

    /// Current machine detection state.
    pub const fn state(&self) -> &DecoderState {
        &self.state
    }

    /// Current state machine phase.
    pub const fn phase(&self) -> DecodePhase {
        self.phase
    }

    /// Number of records produced so far.
    pub const fn records_decoded(&self) -> usize {
        self.records_decoded
    }

    /// Borrow the trace sink.
    pub const fn trace(&self) -> &S {
        &self.trace
    }

    /// Returns the reader and trace sink.
    pub fn into_parts(self) -> (R, S) {
        (self.reader, self.trace)
    }
}

impl<R: Read, S: TraceSink> StreamDecoder<R, S> {
    /// Decodes the next record.
    ///
    /// Returns `Ok(None)` at a clean end of stream and on every call after
    /// the decoder reached a terminal phase.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`DecodeError`]; the decoder then stays in
    /// [`DecodePhase::Failed`].
    pub fn next_record(&mut self) -> Result<Option<Record>, DecodeError> {
        self.step().inspect_err(|error| {
            self.phase = DecodePhase::Failed(error.class());
        })
    }

    fn step(&mut self) -> Result<Option<Record>, DecodeError> {
        loop {
            match self.phase {
                DecodePhase::Done | DecodePhase::Failed(_) => return Ok(None),
                DecodePhase::AwaitingTag => match self.read_tag()? {
                    None => {
                        self.finish(false);
                        return Ok(None);
                    }
                    Some(BI_LAST) => {
                        self.finish(true);
                        return Ok(None);
                    }
                    Some(tag) => self.phase = DecodePhase::AwaitingSize { tag },
                },
                DecodePhase::AwaitingSize { tag } => {
                    let raw_size = self.read_size(tag)?;
                    if !is_valid_raw_size(raw_size) {
                        return Err(DecodeError::InvalidSize { tag, raw_size });
                    }
                    self.phase = DecodePhase::AwaitingPayload { tag, raw_size };
                }
                DecodePhase::AwaitingPayload { tag, raw_size } => {
                    let payload = self.read_payload(tag, usize::from(raw_size) - HEADER_BYTES)?;
                    let record = self.state.classify(tag, payload, &mut self.trace);
                    validate_record(&record)?;

                    self.trace.on_event(DecodeEvent::RecordDecoded {
                        tag,
                        payload_len: record.payload.len(),
                        semantic_type: record.semantic_type,
                    });
                    self.records_decoded += 1;
                    self.phase = DecodePhase::AwaitingTag;
                    return Ok(Some(record));
                }
            }
        }
    }

    fn finish(&mut self, sentinel: bool) {
        self.phase = DecodePhase::Done;
        self.trace.on_event(DecodeEvent::EndOfStream { sentinel });
    }

    // A zero-byte read here is the clean end of the stream; a partial tag
    // is not.
    fn read_tag(&mut self) -> Result<Option<u16>, DecodeError> {
        let mut buf = [0u8; 2];
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => return Err(DecodeError::TruncatedTag),
                Ok(n) => filled += n,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(DecodeError::ReadTag(error)),
            }
        }
        Ok(Some(read_be16(&buf)))
    }

    fn read_size(&mut self, tag: u16) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.reader
            .read_exact(&mut buf)
            .map_err(|error| DecodeError::from_read(tag, error))?;
        Ok(read_be16(&buf))
    }

    fn read_payload(&mut self, tag: u16, size: usize) -> Result<Vec<u8>, DecodeError> {
        let mut payload = Vec::new();
        payload
            .try_reserve_exact(size)
            .map_err(|_| DecodeError::OutOfMemory { tag, size })?;
        payload.resize(size, 0);
        self.reader
            .read_exact(&mut payload)
            .map_err(|error| DecodeError::from_read(tag, error))?;
        Ok(payload)
    }
}

impl<R: Read, S: TraceSink> Iterator for StreamDecoder<R, S> {
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Decodes a whole stream into records.
///
/// # Errors
///
/// Returns the first fatal [`DecodeError`]; records decoded before it are
/// discarded.
pub fn decode_all<R: Read>(reader: R) -> Result<Vec<Record>, DecodeError> {
    StreamDecoder::new(reader).collect()
}
