//! Reads and writes the huffzip container.
//!
//! ```text
//! byte 0:           alphabet size N (1..=255)
//! N times:          symbol (1 byte), code length L (1 byte, 1..=255),
//!                   ceil(L/8) bytes of code bits, zero padded on the right
//! next byte:        padding count P (0..=7)
//! remaining bytes:  packed codes of the text, then P zero bits
//! ```
//!
//! All fields are single bytes, so there is no byte order to worry about.

use log::{debug, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{code_to_string, CodeTable, DecodeTable};

/// The alphabet size field is one byte.
pub const MAX_ALPHABET: usize = 255;
/// The code length field is one byte.
pub const MAX_CODE_LEN: usize = 255;

/// Write the alphabet size and every (symbol, length, code) entry in ascending symbol order.
pub fn serialize_header(table: &CodeTable) -> Result<Vec<u8>> {
    if table.len() > MAX_ALPHABET {
        return Err(HuffError::AlphabetTooLarge(table.len()));
    }
    if table.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    let size = 1 + table
        .iter()
        .map(|(_, code)| 2 + (code.len() + 7) / 8)
        .sum::<usize>();
    let mut bp = BitPacker::new(size);
    bp.out8(table.len() as u8);
    for (sym, code) in table.iter() {
        if code.is_empty() || code.len() > MAX_CODE_LEN {
            return Err(HuffError::malformed(
                bp.output.len(),
                format!("symbol {:#04x} has a code of {} bits", sym, code.len()),
            ));
        }
        trace!("Header entry {:#04x}: {} at {}", sym, code_to_string(code), bp.loc());
        bp.out8(sym);
        bp.out8(code.len() as u8);
        bp.out_bits(code);
        // Each code starts on a fresh byte.
        bp.flush();
    }
    debug!("Header is {} bytes for {} symbols.", bp.output.len(), table.len());
    Ok(bp.output)
}

/// Read the header starting at `cursor`. Returns the decode table and the offset of the
/// padding marker that follows the header.
pub fn deserialize_header(bytes: &[u8], cursor: usize) -> Result<(DecodeTable, usize)> {
    let mut br = BitReader::new(bytes.get(cursor..).unwrap_or_default());
    let at = |br: &BitReader<'_>| cursor + br.position();

    let symbols = br
        .byte()
        .ok_or_else(|| HuffError::malformed(cursor, "missing alphabet size"))?;
    if symbols == 0 {
        return Err(HuffError::malformed(cursor, "alphabet size of 0"));
    }

    let mut seen = [false; 256];
    let mut codes = Vec::with_capacity(symbols as usize);
    let mut decode = DecodeTable::default();
    for _ in 0..symbols {
        let offset = at(&br);
        let sym = br
            .byte()
            .ok_or_else(|| HuffError::malformed(offset, "header ends before symbol"))?;
        let len = br
            .byte()
            .ok_or_else(|| HuffError::malformed(offset + 1, "header ends before code length"))?
            as usize;
        if len == 0 {
            return Err(HuffError::malformed(offset + 1, "code length of 0"));
        }
        if seen[sym as usize] {
            return Err(HuffError::malformed(
                offset,
                format!("symbol {:#04x} appears twice", sym),
            ));
        }
        seen[sym as usize] = true;

        let code_bytes = (len + 7) / 8;
        let code = br.bools(len).ok_or_else(|| {
            HuffError::malformed(
                offset + 2,
                format!("{} code bytes run past the end of the buffer", code_bytes),
            )
        })?;
        // The rest of the last code byte must be zero padding.
        let pad_bits = code_bytes * 8 - len;
        if br.bools(pad_bits).map_or(true, |pad| pad.iter().any(|&b| b)) {
            return Err(HuffError::malformed(
                offset + 2,
                format!("code for {:#04x} has non-zero padding", sym),
            ));
        }
        trace!("Read code {} for {:#04x}", code_to_string(&code), sym);

        if decode.insert(code.clone(), sym).is_some() {
            return Err(HuffError::malformed(
                offset,
                format!("code {} is used twice", code_to_string(&code)),
            ));
        }
        codes.push((sym, code));
    }

    if !CodeTable::from_codes(codes).is_prefix_free() {
        return Err(HuffError::malformed(cursor, "codes are not prefix-free"));
    }
    let end = at(&br);
    debug!("Read {} codes, payload starts at byte {}.", decode.len(), end);
    Ok((decode, end))
}

/// Padding marker followed by the packed bits.
pub fn serialize_payload(padding: u8, packed: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(packed.len() + 1);
    out.push(padding);
    out.extend_from_slice(packed);
    out
}

/// Split the payload starting at `cursor` into its padding count and packed bytes.
pub fn deserialize_payload(bytes: &[u8], cursor: usize) -> Result<(u8, &[u8])> {
    let padding = *bytes
        .get(cursor)
        .ok_or_else(|| HuffError::TruncatedPayload("missing padding marker".to_string()))?;
    if padding > 7 {
        return Err(HuffError::malformed(
            cursor,
            format!("padding marker of {}", padding),
        ));
    }
    let packed = &bytes[cursor + 1..];
    if packed.is_empty() {
        return Err(HuffError::TruncatedPayload("no payload bytes".to_string()));
    }
    if (padding as usize) > packed.len() * 8 {
        return Err(HuffError::TruncatedPayload(format!(
            "{} padding bits but only {} payload bits",
            padding,
            packed.len() * 8
        )));
    }
    Ok((padding, packed))
}
