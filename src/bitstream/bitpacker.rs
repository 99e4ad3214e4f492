use log::error;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// Packs bits into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Zero bits added by flush() to fill the last byte.
    pub padding: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size (in bytes) specified.
    /// Call flush() to flush the bit queue to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            padding: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts a run of bits on the stream, first bit first.
    pub fn out_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.out_bit(bit);
        }
    }

    /// Puts an 8 bit word of pre-packed binary encoded data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.queue <<= 8; //shift queue by bit length
        self.queue |= data as u64; //add data portion to queue
        self.q_bits += 8; //update depth of queue bits
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Returns how many padding bits were added.
    pub fn flush(&mut self) -> u8 {
        self.padding = (8 - self.q_bits % 8) % 8;
        if self.q_bits > 0 {
            self.queue <<= self.padding; //pad the queue with zeros
            self.q_bits += self.padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        self.padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

/// Concatenate the code of every symbol of the text, in text order.
pub fn encode(text: &[u8], table: &CodeTable) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(text.len() * 2);
    for &sym in text {
        let code = table.code(sym).ok_or(HuffError::UnknownSymbol(sym))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Append zero bits until the length is a multiple of 8. Returns the number of bits
/// added (0-7) and the padded sequence.
pub fn pad(mut bits: Vec<bool>) -> (u8, Vec<bool>) {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    bits.resize(bits.len() + padding as usize, false);
    (padding, bits)
}

/// Group bits into bytes. A trailing partial byte is padded with zeros.
pub fn to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut bp = BitPacker::new((bits.len() + 7) / 8);
    bp.out_bits(bits);
    bp.flush();
    bp.output
}

#[cfg(test)]
mod test {
    use super::{encode, pad, to_bytes, BitPacker};
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::CodeTable;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn out8_test() {
        let mut bp = BitPacker::new(10);
        bp.out8(b'!');
        bp.out8(b' ');
        assert_eq!(bp.flush(), 0);
        assert_eq!(bp.output, "! ".as_bytes());
    }

    #[test]
    fn out_bits_and_loc_test() {
        let mut bp = BitPacker::new(10);
        bp.out_bits(&bits("101"));
        assert_eq!("[0.3]", &bp.loc());
        bp.out8(0xff);
        assert_eq!("[1.3]", &bp.loc());
        assert_eq!(bp.flush(), 5);
        assert_eq!(bp.output, vec![0b1011_1111, 0b1110_0000]);
        assert_eq!("[2.0]", &bp.loc());
    }

    #[test]
    fn pad_test() {
        for k in 0..40 {
            let (padding, padded) = pad(vec![true; k]);
            assert_eq!(padded.len() % 8, 0);
            assert_eq!(padded.len(), k + padding as usize);
            assert!(padding < 8);
            assert!(padded[k..].iter().all(|&b| !b));
        }
        assert_eq!(pad(vec![]), (0, vec![]));
    }

    #[test]
    fn to_bytes_test() {
        let (padding, padded) = pad(bits("10100001111"));
        assert_eq!(padding, 5);
        assert_eq!(to_bytes(&padded), vec![0xa1, 0xe0]);
        assert_eq!(to_bytes(&[]), Vec::<u8>::new());
    }

    #[test]
    fn encode_test() {
        let table = CodeTable::from_codes(vec![
            (b'a', bits("10")),
            (b'b', bits("0")),
            (b'c', bits("11")),
        ]);
        assert_eq!(encode(b"aabbbcc", &table), Ok(bits("10100001111")));
        assert_eq!(encode(b"abx", &table), Err(HuffError::UnknownSymbol(b'x')));
    }
}
