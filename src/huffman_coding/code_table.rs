//! Turns a huffman tree into the symbol → code table used to encode, and the inverse
//! code → symbol table used to decode.
//!
//! Codes are kept as plain `Vec<bool>` paths from the root (false = left, true = right).
//! The tree has at most 255 leaves, so a code never exceeds 254 bits.

use std::collections::BTreeMap;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};
use crate::tools::freq_count::FrequencyTable;

/// Symbol to code mapping. Iterates in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Build a table from already assigned codes. Used when the codes come from somewhere
    /// other than a tree walk.
    pub fn from_codes<I: IntoIterator<Item = (u8, Vec<bool>)>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&sym, code)| (sym, code.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Size of the encoded text in bits: sum of count × code length.
    pub fn encoded_bits(&self, freqs: &FrequencyTable) -> usize {
        freqs
            .iter()
            .map(|(sym, count)| count * self.codes.get(&sym).map_or(0, |c| c.len()))
            .sum()
    }

    /// True if no code is a prefix of another code.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before the codes it prefixes.
        let mut sorted: Vec<&Vec<bool>> = self.codes.values().collect();
        sorted.sort();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Build the inverse table used by the decoder.
    pub fn inverse(&self) -> DecodeTable {
        let mut decode = DecodeTable::default();
        for (&sym, code) in &self.codes {
            decode.insert(code.clone(), sym);
        }
        decode
    }
}

/// Code to symbol mapping used by the decode walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeTable {
    map: FxHashMap<Vec<bool>, u8>,
    max_len: usize,
}

impl DecodeTable {
    /// Insert a code. Returns the symbol previously mapped to this code, if any.
    pub fn insert(&mut self, code: Vec<bool>, symbol: u8) -> Option<u8> {
        self.max_len = self.max_len.max(code.len());
        self.map.insert(code, symbol)
    }

    pub fn get(&self, code: &[bool]) -> Option<u8> {
        self.map.get(code).copied()
    }

    /// Length of the longest code. Any longer accumulation can never match.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Walk the tree and assign every leaf its path as a code. A lone leaf root gets the
/// one bit code `0`; an empty code would never be matched by the decoder.
pub fn generate(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();
    if let NodeData::Leaf(sym) = root.node_data {
        table.codes.insert(sym, vec![false]);
    } else {
        let mut path = Vec::with_capacity(root.depth());
        return_leaves(root, &mut path, &mut table.codes);
    }
    debug!(
        "Generated {} codes, longest is {} bits.",
        table.len(),
        table.codes.values().map(|c| c.len()).max().unwrap_or(0)
    );
    table
}

/// Recursively walk the tree, pushing `false` going left and `true` going right, and
/// record the path at each leaf.
fn return_leaves(node: &Node, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Vec<bool>>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            path.push(false);
            return_leaves(left_child, path, codes);
            path.pop();
            path.push(true);
            return_leaves(right_child, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            trace!("Symbol {:#04x} gets {} bit code", sym, path.len());
            codes.insert(*sym, path.clone());
        }
    }
}

/// Render a code as a string of '0' and '1'. Handy for logs and tests.
pub fn code_to_string(code: &[bool]) -> String {
    code.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
