//! Reed-Solomon error correction codes over GF(256).
//!
//! A Reed-Solomon code adds `nsym` parity symbols to a message of bytes. Up
//! to `nsym / 2` wrong bytes in the resulting codeword can then be corrected.
//! The code implemented here is systematic, the codeword is the message
//! followed by the parity. Message and parity together can be at most 255
//! bytes long. Shorter codewords are treated as full blocks of 255 bytes
//! padded with zeros in front.
//!
//! The decoder is syndrome based, it uses the Berlekamp-Massey algorithm,
//! a Chien search and Forney's algorithm. See the [`decoding`] module.
//! More errors than correctable are detected in most cases. The decoder
//! never returns a corrected block which is not a codeword.
//!
//! Arithmetic is done in GF(256) with the primitive polynomial 0x11D by
//! default, other primitive polynomials can be used with a [`Field`].
//!
//! ```
//! let codeword = reed_solomon_bm::encode(b"hello world", 10).unwrap();
//! let mut received = codeword.clone();
//! for i in [0, 3, 5, 12, 20] {
//!     received[i] = 0;
//! }
//! let decoded = reed_solomon_bm::decode(&received, 10).unwrap();
//! assert!(decoded.is_corrected());
//! assert_eq!(decoded.word, codeword);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod codec;
pub mod decoding;
pub mod encoding;
mod error;
pub mod galois;
pub mod poly;

use alloc::vec::Vec;

pub use codec::Codec;
pub use decoding::{Decoded, Failure, Outcome};
pub use error::Error;
pub use galois::{Field, FieldError, GF};
pub use poly::Poly;

/// Encode `message` with `nsym` parity symbols using the standard field.
pub fn encode(message: &[u8], nsym: usize) -> Result<Vec<u8>, Error> {
    Codec::new(nsym)?.encode(message)
}

/// Decode a block with `nsym` parity symbols using the standard field.
///
/// Uncorrectable blocks are not an error, check [`Decoded::outcome`].
pub fn decode(received: &[u8], nsym: usize) -> Result<Decoded, Error> {
    Codec::new(nsym)?.decode(received)
}

/// Convert integers to symbols, failing for values outside of 0..=255.
pub fn to_symbols<T: Copy + Into<i64>>(values: &[T]) -> Result<Vec<u8>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            let value: i64 = (*v).into();
            u8::try_from(value).map_err(|_| Error::InvalidSymbol { index, value })
        })
        .collect()
}

#[test]
fn symbols_from_integers() {
    assert_eq!(to_symbols(&[0i32, 17, 255]), Ok(vec![0, 17, 255]));
    assert_eq!(
        to_symbols(&[3i32, 256]),
        Err(Error::InvalidSymbol {
            index: 1,
            value: 256
        })
    );
    assert_eq!(
        to_symbols(&[-1i64]),
        Err(Error::InvalidSymbol {
            index: 0,
            value: -1
        })
    );
    assert_eq!(to_symbols::<u16>(&[]), Ok(vec![]));
}

#[test]
fn free_functions() {
    let codeword = encode(&[32, 91, 11, 120, 209], 4).unwrap();
    assert_eq!(codeword, vec![32, 91, 11, 120, 209, 226, 54, 126, 182]);
    let decoded = decode(&codeword, 4).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(encode(&[1, 2], 0), Ok(vec![1, 2]));
    assert_eq!(encode(&[], 255), Ok(vec![0; 255]));
    assert!(decode(&[1, 2, 3], 0).unwrap().is_corrected());
    assert_eq!(encode(&[], 256), Err(Error::InvalidParityCount(256)));
}
