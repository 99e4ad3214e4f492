//! The bitstream module is the bit-level I/O subsystem of huffzip.
//!
//! Huffman codes are not byte aligned, so the encoded text is built as a run of bits and
//! packed into bytes before it goes into the container. Decoding reads it back the same way.
//!
//! - bitpacker: encodes text into bits, pads the bits to a whole number of bytes and packs them.
//! - bitreader: reads bits and bytes back out of a packed buffer, strips padding and
//!   walks the bits against the decode table.
//!
pub mod bitpacker;
pub mod bitreader;
