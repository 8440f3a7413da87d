//! Syndrome based decoding.
//!
//! The decoder is made of the classic steps:
//!
//! 1. Compute the syndrome values. If all are zero the block is a codeword.
//! 2. Compute the error locator polynomial σ with the Berlekamp-Massey algorithm.
//! 3. Compute the error locations with a Chien search for the roots of σ.
//! 4. Compute the error values with Forney's algorithm.
//!
//! After the correction the syndromes are computed again. A corrected block
//! is only returned if it is a codeword. In every other case the received
//! block is returned unmodified, together with the reason for the failure.
pub mod berlekamp_massey;
pub mod chien;
pub mod forney;
pub mod syndromes;

use alloc::vec::Vec;

use log::{debug, trace};
use thiserror::Error;

use crate::error::Error;
use crate::galois::{Field, GF, ORDER};
use crate::poly::Poly;

/// Reasons why a received block could not be corrected.
///
/// All of them mean that there were more errors than the code can correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    /// The error locator has a higher degree than the number of correctable errors.
    ///
    /// This is checked before the root search, so such a locator is never
    /// reported as [`Failure::NoRoots`] even if it has no roots.
    #[error("error locator of degree {degree} exceeds the capacity of {capacity} errors")]
    TooManyErrors { degree: usize, capacity: usize },
    /// The error locator has no roots inside the block.
    #[error("no roots")]
    NoRoots,
    /// The number of roots in the block differs from the degree of the error locator.
    ///
    /// This includes roots which would point into the zero padding of a
    /// shortened block.
    #[error("found {roots} roots for an error locator of degree {degree}")]
    RootCountMismatch { degree: usize, roots: usize },
    /// The derivative of the error locator vanishes at an error location.
    #[error("degenerate derivative")]
    DegenerateDerivative,
    /// The corrected block still has nonzero syndromes.
    ///
    /// Happens when the shortest LFSR is longer than the degree of its
    /// connection polynomial, the locator then misses errors.
    #[error("verification failed")]
    VerificationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The block is a codeword, possibly after correcting errors.
    Corrected,
    /// The block could not be corrected and is returned unmodified.
    Uncorrected(Failure),
}

/// The result of decoding a block, with the values computed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The corrected block, or the received block if it could not be corrected.
    pub word: Vec<u8>,
    pub outcome: Outcome,
    /// S_1, ..., S_nsym of the received block.
    pub syndromes: Vec<GF>,
    /// The error locator, 1 if the block had no errors or decoding stopped
    /// before it was computed.
    pub locator: Poly,
    /// Indices of the corrected bytes, empty unless corrected.
    pub error_positions: Vec<usize>,
    /// The values XORed into the bytes at `error_positions`.
    pub error_magnitudes: Vec<GF>,
}

impl Decoded {
    pub fn is_corrected(&self) -> bool {
        self.outcome == Outcome::Corrected
    }

    /// The reason for the failure, `None` if the block was corrected.
    pub fn failure(&self) -> Option<Failure> {
        match self.outcome {
            Outcome::Corrected => None,
            Outcome::Uncorrected(failure) => Some(failure),
        }
    }

    fn fail(mut self, failure: Failure) -> Self {
        debug!("block of {} symbols not corrected: {}", self.word.len(), failure);
        self.outcome = Outcome::Uncorrected(failure);
        self
    }
}

/// Decode a received block with `nsym` parity symbols at the end.
///
/// The block can be shortened, i.e., shorter than 255 symbols. Uncorrectable
/// blocks are reported in [`Decoded::outcome`], an error is only returned
/// for blocks longer than 255 symbols.
pub fn decode(received: &[u8], nsym: usize, field: &Field) -> Result<Decoded, Error> {
    let n = received.len();
    if n > ORDER {
        return Err(Error::BlockTooLong(n));
    }

    // 1. Calculate syndromes
    let syn = syndromes::compute(received, nsym, field);
    trace!("syndromes: {:?}", syn);
    let decoded = Decoded {
        word: received.to_vec(),
        outcome: Outcome::Corrected,
        syndromes: syn,
        locator: Poly::one(),
        error_positions: Vec::new(),
        error_magnitudes: Vec::new(),
    };
    if syndromes::all_zero(&decoded.syndromes) {
        return Ok(decoded);
    }

    // 2. Find the error locator
    let sigma = berlekamp_massey::locator(&decoded.syndromes, field);
    trace!("error locator: {:?}", sigma);
    let degree = sigma.degree();
    let decoded = Decoded {
        locator: sigma,
        ..decoded
    };
    let capacity = nsym / 2;
    if degree > capacity {
        return Ok(decoded.fail(Failure::TooManyErrors { degree, capacity }));
    }

    // 3. Find error locations, a root at position i means that the byte
    // with power i, so at index n - 1 - i, is wrong
    let roots = chien::search(&decoded.locator, n, field);
    trace!("roots: {:?}", roots);
    if roots.is_empty() {
        return Ok(decoded.fail(Failure::NoRoots));
    }
    if roots.len() != degree {
        return Ok(decoded.fail(Failure::RootCountMismatch {
            degree,
            roots: roots.len(),
        }));
    }

    // 4. Find error values
    let omega = forney::evaluator(&decoded.syndromes, &decoded.locator, field);
    let magnitudes = match forney::magnitudes(&omega, &decoded.locator, &roots, field) {
        Ok(magnitudes) => magnitudes,
        Err(_) => return Ok(decoded.fail(Failure::DegenerateDerivative)),
    };
    trace!("error values: {:?}", magnitudes);

    // 5. Correct errors
    let mut word = decoded.word.clone();
    let positions: Vec<usize> = roots.iter().map(|pos| n - 1 - pos).collect();
    for (idx, err) in positions.iter().zip(magnitudes.iter()) {
        word[*idx] = (GF(word[*idx]) - *err).into();
    }

    // 6. Verify
    if !syndromes::all_zero(&syndromes::compute(&word, nsym, field)) {
        return Ok(decoded.fail(Failure::VerificationFailed));
    }
    trace!("corrected {} errors at {:?}", positions.len(), positions);
    Ok(Decoded {
        word,
        error_positions: positions,
        error_magnitudes: magnitudes,
        ..decoded
    })
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
const CODEWORD: [u8; 9] = [32, 91, 11, 120, 209, 226, 54, 126, 182];

#[test]
fn decode_without_errors() {
    let field = Field::standard();
    let decoded = decode(&CODEWORD, 4, field).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.word, CODEWORD.to_vec());
    assert_eq!(decoded.syndromes, vec![GF(0); 4]);
    assert_eq!(decoded.locator, Poly::one());
    assert!(decoded.error_positions.is_empty());
    assert!(decoded.error_magnitudes.is_empty());
    assert_eq!(decoded.failure(), None);
}

#[test]
fn decode_two_errors() {
    let field = Field::standard();
    let mut received = CODEWORD;
    received[2] ^= 5;
    received[5] ^= 3;
    let decoded = decode(&received, 4, field).unwrap();
    assert_eq!(decoded.outcome, Outcome::Corrected);
    assert_eq!(decoded.word, CODEWORD.to_vec());
    assert_eq!(
        decoded.syndromes,
        vec![GF(69), GF(30), GF(215), GF(195)]
    );
    assert_eq!(decoded.locator.coefficients(), &[GF(1), GF(72), GF(58)]);
    assert_eq!(decoded.error_positions, vec![5, 2]);
    assert_eq!(decoded.error_magnitudes, vec![GF(3), GF(5)]);
}

#[test]
fn decode_one_error_in_parity() {
    let field = Field::standard();
    let mut received = CODEWORD;
    received[8] = 0;
    let decoded = decode(&received, 4, field).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.word, CODEWORD.to_vec());
    assert_eq!(decoded.error_positions, vec![8]);
    assert_eq!(decoded.error_magnitudes, vec![GF(182)]);
}

#[test]
fn decode_three_errors_fails() {
    let field = Field::standard();
    let mut received = CODEWORD;
    received[0] ^= 1;
    received[3] ^= 7;
    received[7] ^= 200;
    let decoded = decode(&received, 4, field).unwrap();
    assert_eq!(decoded.outcome, Outcome::Uncorrected(Failure::NoRoots));
    assert_eq!(decoded.word, received.to_vec());
    assert_eq!(decoded.locator.coefficients(), &[GF(1), GF(240), GF(242)]);
    assert!(decoded.error_positions.is_empty());
    assert!(decoded.error_magnitudes.is_empty());
}

#[test]
fn decode_four_errors_fails() {
    let field = Field::standard();
    let received = [1, 2, 3, 4, 0, 0, 0, 0, 0];
    let decoded = decode(&received, 4, field).unwrap();
    assert_eq!(decoded.failure(), Some(Failure::NoRoots));
    assert_eq!(decoded.word, received.to_vec());
}

#[test]
fn decode_locator_degree_too_high() {
    let field = Field::standard();
    let received = [1, 0, 0, 0, 179, 0, 0, 0, 2];
    let decoded = decode(&received, 4, field).unwrap();
    assert_eq!(
        decoded.outcome,
        Outcome::Uncorrected(Failure::TooManyErrors {
            degree: 3,
            capacity: 2
        })
    );
    assert_eq!(decoded.locator.degree(), 3);
    assert_eq!(decoded.word, received.to_vec());
}

#[test]
fn decode_correction_not_verified() {
    // the shortest LFSR has length 2 with connection polynomial 1 + 4x
    let field = Field::standard();
    let received = [213, 205, 64, 213, 0, 0, 0];
    let decoded = decode(&received, 4, field).unwrap();
    assert_eq!(
        decoded.outcome,
        Outcome::Uncorrected(Failure::VerificationFailed)
    );
    assert_eq!(decoded.word, received.to_vec());
    assert_eq!(
        decoded.syndromes,
        vec![GF(105), GF(127), GF(225), GF(163)]
    );
    assert_eq!(decoded.locator.coefficients(), &[GF(1), GF(4)]);
    assert!(decoded.error_positions.is_empty());
    assert!(decoded.error_magnitudes.is_empty());
}

#[test]
fn decode_rejects_long_blocks() {
    let field = Field::standard();
    assert_eq!(
        decode(&[0; 256], 4, field),
        Err(Error::BlockTooLong(256))
    );
}

#[test]
fn decode_shortened_and_full_block() {
    let field = Field::standard();
    let g = crate::encoding::generator(6, field);
    let message = b"shortened";
    let short = crate::encoding::encode(message, &g, field).unwrap();
    let full = crate::encoding::encode_full(message, &g, field).unwrap();

    let mut short_rx = short.clone();
    short_rx[1] ^= 0x40;
    short_rx[10] ^= 0xFF;
    let mut full_rx = full.clone();
    let offset = full.len() - short.len();
    full_rx[offset + 1] ^= 0x40;
    full_rx[offset + 10] ^= 0xFF;

    let a = decode(&short_rx, 6, field).unwrap();
    let b = decode(&full_rx, 6, field).unwrap();
    assert_eq!(a.word, short);
    assert_eq!(b.word, full);
    assert_eq!(a.syndromes, b.syndromes);
    assert_eq!(a.error_magnitudes, b.error_magnitudes);
    assert_eq!(
        a.error_positions,
        b.error_positions
            .iter()
            .map(|p| p - offset)
            .collect::<Vec<_>>()
    );
}

#[test]
fn failure_messages() {
    assert_eq!(Failure::NoRoots.to_string(), "no roots");
    assert_eq!(
        Failure::DegenerateDerivative.to_string(),
        "degenerate derivative"
    );
    assert_eq!(
        Failure::VerificationFailed.to_string(),
        "verification failed"
    );
    assert_eq!(
        Failure::RootCountMismatch {
            degree: 2,
            roots: 1
        }
        .to_string(),
        "found 1 roots for an error locator of degree 2"
    );
}
