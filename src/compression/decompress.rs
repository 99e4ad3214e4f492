use log::{debug, trace};

use crate::bitstream::bitreader::{decode, from_bytes, strip_padding};
use crate::error::Result;

use super::container::{deserialize_header, deserialize_payload};

/// Decompress a container back into the original text.
///
/// The header is read first to rebuild the decode table. The payload bits are then
/// expanded, the padding bits dropped, and the remaining bits walked against the table.
/// Nothing is returned unless the whole payload decodes cleanly.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let (table, payload_start) = deserialize_header(container, 0)?;
    let (padding, packed) = deserialize_payload(container, payload_start)?;
    trace!(
        "Payload at byte {}: {} bytes, {} padding bits.",
        payload_start,
        packed.len(),
        padding
    );

    let bits = strip_padding(padding, from_bytes(packed));
    let text = decode(&bits, &table)?;
    debug!(
        "Decoded {} bits from {} codes into {} bytes.",
        bits.len(),
        table.len(),
        text.len()
    );
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::decompress;
    use crate::compression::compress::compress;
    use crate::error::HuffError;

    const FIXTURE: [u8; 13] = [3, 0x61, 2, 0x80, 0x62, 1, 0x00, 0x63, 2, 0xc0, 5, 0xa1, 0xe0];

    /// Small xorshift generator so the random round trips are repeatable.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }
    }

    #[test]
    fn fixture_test() {
        assert_eq!(decompress(&FIXTURE), Ok(b"aabbbcc".to_vec()));
    }

    #[test]
    fn round_trip_test() {
        let texts: [&[u8]; 6] = [
            b"a",
            b"aaaaa",
            b"ab",
            b"Hello, world!",
            b"The quick brown fox jumps over the lazy dog.\nThe end.\n",
            &[0, 0, 0, 255, 254, 0, 1, 1, 1, 128],
        ];
        for text in texts {
            let container = compress(text).unwrap();
            assert_eq!(decompress(&container).unwrap(), text);
        }
    }

    #[test]
    fn random_round_trip_test() {
        let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
        for round in 0..50 {
            let len = 1 + (rng.next() % 2000) as usize;
            // Vary the alphabet from 1 to 255 symbols.
            let alphabet = 1 + (round * 5 % 255) as u64;
            let text: Vec<u8> = (0..len).map(|_| (rng.next() % alphabet) as u8).collect();
            let container = compress(&text).unwrap();
            assert_eq!(decompress(&container).unwrap(), text);
        }
    }

    #[test]
    fn full_alphabet_round_trip_test() {
        // 255 distinct symbols is the most a container can hold.
        let text: Vec<u8> = (1..=255_u8).cycle().take(5000).collect();
        let container = compress(&text).unwrap();
        assert_eq!(container[0], 255);
        assert_eq!(decompress(&container).unwrap(), text);
    }

    #[test]
    fn skewed_tree_round_trip_test() {
        // Fibonacci counts make a code as long as the alphabet allows.
        let mut text = vec![];
        let (mut a, mut b) = (1_usize, 1_usize);
        for sym in 0..20_u8 {
            text.extend(std::iter::repeat(sym).take(a));
            let next = a + b;
            a = b;
            b = next;
        }
        let container = compress(&text).unwrap();
        assert_eq!(decompress(&container).unwrap(), text);
    }

    #[test]
    fn truncated_fixture_test() {
        let short = &FIXTURE[..FIXTURE.len() - 1];
        assert_eq!(
            decompress(short),
            Err(HuffError::UnmatchedBits { remaining: 1 })
        );
        // Dropping the whole payload leaves only the padding marker.
        assert!(matches!(
            decompress(&FIXTURE[..11]),
            Err(HuffError::TruncatedPayload(_))
        ));
        assert!(matches!(
            decompress(&FIXTURE[..10]),
            Err(HuffError::TruncatedPayload(_))
        ));
    }

    #[test]
    fn truncation_never_silent_test() {
        let mut rng = XorShift(42);
        for _ in 0..50 {
            let len = 1 + (rng.next() % 300) as usize;
            let text: Vec<u8> = (0..len).map(|_| b'a' + (rng.next() % 12) as u8).collect();
            let container = compress(&text).unwrap();
            match decompress(&container[..container.len() - 1]) {
                Err(HuffError::TruncatedPayload(_)) | Err(HuffError::UnmatchedBits { .. }) => {}
                Ok(out) => assert_ne!(out.len(), text.len()),
                Err(e) => panic!("unexpected error {:?}", e),
            }
        }
    }

    #[test]
    fn malformed_test() {
        assert!(matches!(
            decompress(&[]),
            Err(HuffError::MalformedHeader { .. })
        ));
        assert!(matches!(
            decompress(&FIXTURE[..5]),
            Err(HuffError::MalformedHeader { .. })
        ));
        let mut bad = FIXTURE;
        bad[10] = 9;
        assert!(matches!(
            decompress(&bad),
            Err(HuffError::MalformedHeader { .. })
        ));
    }
}
