//! Segment delimiter rewriting
//!
//! HL7 segments are separated by a single carriage return on the wire. Files
//! saved by editors and most tooling use CRLF instead; this collapses every
//! CRLF pair to a bare CR and leaves every other byte alone.

/// Carriage return, the HL7 segment terminator
pub const CR: u8 = 0x0D;

/// Line feed
pub const LF: u8 = 0x0A;

/// Output of [`collapse_crlf`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    pub bytes: Vec<u8>,

    /// Number of CRLF pairs that were collapsed
    pub pairs: usize,
}

/// Replace every non-overlapping CRLF pair with CR, scanning left to right.
pub fn collapse_crlf(input: &[u8]) -> Collapsed {
    let mut bytes = Vec::with_capacity(input.len());
    let mut pairs = 0;
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];
        bytes.push(byte);
        if byte == CR && input.get(i + 1) == Some(&LF) {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    Collapsed { bytes, pairs }
}

/// Count the CRLF pairs [`collapse_crlf`] would replace, without copying.
pub fn count_crlf(input: &[u8]) -> usize {
    input.windows(2).filter(|w| w[0] == CR && w[1] == LF).count()
}
