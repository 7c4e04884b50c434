//! Fixed-width big-endian value decoders for record payloads.

const BE32_BYTES: usize = 4;

/// Reads an unsigned 16-bit big-endian value from the first two bytes.
///
/// Callers guarantee `bytes.len() >= 2`; the decoder validates payload
/// widths before any renderer reaches for a field.
#[must_use]
pub const fn read_be16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Reads an unsigned 32-bit big-endian value from the first four bytes.
///
/// Callers guarantee `bytes.len() >= 4`.
#[must_use]
pub const fn read_be32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Reads a 32-bit big-endian value at `offset`, or `None` when the slice is
/// too short to hold it.
#[must_use]
pub fn read_be32_at(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(BE32_BYTES)?;
    bytes.get(offset..end).map(read_be32)
}
