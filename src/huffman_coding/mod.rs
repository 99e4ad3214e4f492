//! The huffman module builds the code used by huffzip.
//!
//! - huffman: builds the huffman tree from a frequency table with a min-heap keyed by
//!   weight, ties broken by the order nodes entered the heap.
//! - code_table: walks the tree into a symbol → code table and the inverse code → symbol
//!   table the decoder needs.
//!
//! The tree is only used to derive the table. Once codes are assigned it is dropped.

pub mod code_table;
pub mod huffman;
