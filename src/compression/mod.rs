//! The compression module is the huffzip engine.
//!
//! Compression happens in the following steps:
//! - Frequency count: how often each byte value occurs in the text.
//! - Huffman tree: repeatedly merge the two lightest nodes until one root remains.
//! - Code table: the path from the root to each leaf is that symbol's code.
//! - Bit packing: concatenate the codes, pad to a byte boundary and pack into bytes.
//! - Container: the code table as a header, then the padding marker and the packed bits.
//!
//! Decompression reads the header to rebuild the code table, unpacks the payload bits,
//! drops the padding and walks the bits against the table.
//!
//! Both directions work on in-memory buffers and never touch files. See `tools::files`
//! for the file handling used by the command line tool.

pub mod compress;
pub mod container;
pub mod decompress;
