//! BitReader: reads a packed container one bit or one byte at a time.
//!
//! The whole container is already in memory, so the reader borrows a byte slice and
//! keeps a byte cursor plus a bit index into the current byte.
//!

use log::trace;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::DecodeTable;

const BIT_MASK: u8 = 0xff;

/// Reads bits from a byte slice, most significant bit first.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read.
    pub fn byte(&mut self) -> Option<u8> {
        if self.bit_index == 0 {
            let byte = *self.buffer.get(self.cursor)?;
            self.cursor += 1;
            return Some(byte);
        }
        if self.remaining_bits() < 8 {
            return None;
        }
        let mut result = 0_u8;
        for _ in 0..8 {
            result = result << 1 | self.bit()? as u8;
        }
        Some(result)
    }

    /// Returns an Option<&[u8]> of n bytes, or None if fewer than n bytes remain.
    /// Only valid on a byte boundary.
    pub fn bytes(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.bit_index != 0 || self.buffer.len() - self.cursor < n {
            return None;
        }
        let buffer = self.buffer;
        let out = &buffer[self.cursor..self.cursor + n];
        self.cursor += n;
        Some(out)
    }

    /// Read n bits as a bool vec, or None if fewer than n bits remain.
    pub fn bools(&mut self, n: usize) -> Option<Vec<bool>> {
        if self.remaining_bits() < n {
            return None;
        }
        (0..n).map(|_| self.bool_bit()).collect()
    }

    /// Bits not yet read.
    pub fn remaining_bits(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// Index of the byte the next read starts in.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

/// Expand bytes into bits, most significant bit first.
pub fn from_bytes(bytes: &[u8]) -> Vec<bool> {
    let mut br = BitReader::new(bytes);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    while let Some(bit) = br.bool_bit() {
        bits.push(bit);
    }
    bits
}

/// Drop the padding bits from the end. A padding count of 0 leaves the bits alone.
pub fn strip_padding(padding: u8, mut bits: Vec<bool>) -> Vec<bool> {
    bits.truncate(bits.len().saturating_sub(padding as usize));
    bits
}

/// Walk the bits, growing a code one bit at a time until it matches the table, then emit
/// the symbol and start over. Codes are prefix-free so the first match is the only match.
pub fn decode(bits: &[bool], table: &DecodeTable) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bits.len() / 2);
    let mut start = 0;
    for end in 1..=bits.len() {
        if let Some(sym) = table.get(&bits[start..end]) {
            out.push(sym);
            start = end;
        } else if end - start >= table.max_len() {
            // Longer than any code, nothing left in the table can match.
            trace!("No code matches the {} bits at offset {}", end - start, start);
            return Err(HuffError::UnmatchedBits {
                remaining: bits.len() - start,
            });
        }
    }
    if start < bits.len() {
        return Err(HuffError::UnmatchedBits {
            remaining: bits.len() - start,
        });
    }
    Ok(out)
}
