//! Huffman coding text compressor.
//!
//! Provides lossless compression and decompression of text whose characters fit in one
//! byte. The code table travels with the data in a small self-describing container, so
//! decompression needs nothing but the container.
//!
//! Basic usage:
//!
//! ```
//! let container = huffzip::compress(b"aabbbcc").unwrap();
//! assert_eq!(huffzip::decompress(&container).unwrap(), b"aabbbcc");
//! ```
//!
//! From the command line, `huffzip notes.txt` writes `notes.bin`, and
//! `huffzip notes.bin` writes `notes_decompressed.txt`.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::{HuffError, Result};
