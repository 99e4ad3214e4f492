use log::{debug, info};

use crate::bitstream::bitpacker::{encode, pad, to_bytes};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::generate;
use crate::huffman_coding::huffman::build_tree;
use crate::tools::freq_count::analyze;

use super::container::{serialize_header, serialize_payload, MAX_ALPHABET};

/*
    Compression is a straight pipeline over the whole text:
    count symbols, build the tree, assign codes, encode the text, pad the bits
    to a byte boundary, then write the header followed by the payload.

    Nothing is kept between calls. Every call builds its own tables, so
    compress can run on several inputs at once.
*/

/// Compress a text into a container. Fails with EmptyInput on an empty text and with
/// AlphabetTooLarge when the text uses all 256 byte values.
pub fn compress(text: &[u8]) -> Result<Vec<u8>> {
    let freqs = analyze(text);
    let root = build_tree(&freqs).ok_or(HuffError::EmptyInput)?;
    // Refuse before doing any encoding work.
    if freqs.distinct() > MAX_ALPHABET {
        return Err(HuffError::AlphabetTooLarge(freqs.distinct()));
    }
    debug!(
        "Found {} distinct symbols in {} bytes, tree depth {}.",
        freqs.distinct(),
        text.len(),
        root.depth()
    );

    let table = generate(&root);
    drop(root);

    let mut container = serialize_header(&table)?;
    let bits = encode(text, &table)?;
    debug_assert_eq!(bits.len(), table.encoded_bits(&freqs));
    let (padding, padded) = pad(bits);
    let packed = to_bytes(&padded);
    debug!(
        "Encoded {} bits into {} bytes with {} padding bits.",
        padded.len() - padding as usize,
        packed.len(),
        padding
    );
    container.extend(serialize_payload(padding, &packed));

    info!(
        "Compressed {} bytes to {} bytes ({:.1}%).",
        text.len(),
        container.len(),
        container.len() as f64 * 100.0 / text.len() as f64
    );
    Ok(container)
}
