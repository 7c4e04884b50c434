//! Decode trace hooks.

use crate::SemanticType;

/// Observable decoder events, emitted in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent {
    /// A machtype record matched the machine table.
    MachineDetected {
        /// `MACH_*` code from the payload.
        code: u32,
        /// Matched family name.
        name: &'static str,
    },
    /// A machtype record carried a code missing from the machine table.
    UnknownMachine {
        /// `MACH_*` code from the payload.
        code: u32,
    },
    /// A unit was read, classified and validated.
    RecordDecoded {
        /// Raw tag.
        tag: u16,
        /// Payload length in bytes.
        payload_len: usize,
        /// Resolved payload type.
        semantic_type: SemanticType,
    },
    /// Decoding finished cleanly.
    EndOfStream {
        /// True when the stream was closed by the sentinel tag rather than
        /// physical end of file.
        sentinel: bool,
    },
}

/// Sink trait for decoder trace hooks.
pub trait TraceSink {
    /// Records an event in stream order.
    fn on_event(&mut self, event: DecodeEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn on_event(&mut self, _event: DecodeEvent) {}
}

impl TraceSink for Vec<DecodeEvent> {
    fn on_event(&mut self, event: DecodeEvent) {
        self.push(event);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn on_event(&mut self, event: DecodeEvent) {
        (**self).on_event(event);
    }
}
