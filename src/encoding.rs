//! Systematic Reed-Solomon encoding.
//!
//! With `nsym` parity symbols the generator polynomial is
//!
//! > g(x) = (x - α^1)(x - α^2)...(x - α^nsym).
//!
//! Let d(x) be the message polynomial, the first message byte being the
//! coefficient of the highest power. We divide d(x) * x^nsym by g(x) to get a
//! quotient q and remainder r such that
//!
//! > d(x) * x^nsym = q(x) g(x) + r(x).
//!
//! Then d(x) * x^nsym - r(x) is divisible by g, so its roots include
//! α^1, ..., α^nsym. Its coefficients are the message followed by the
//! coefficients of -r(x) = r(x), the parity.
//!
//! Messages are embedded into a block of 255 symbols by padding them with
//! zeros in front. These zeros are coefficients of the highest powers and do
//! not change any polynomial, so the parity of a shortened codeword is the
//! same as the parity of the full block.
use alloc::{vec, vec::Vec};

use crate::error::Error;
use crate::galois::{Field, GF, ORDER};
use crate::poly::Poly;

/// Build the generator polynomial of degree `nsym`.
///
/// The result is monic.
pub fn generator(nsym: usize, field: &Field) -> Poly {
    (1..=nsym).fold(Poly::one(), |g, i| {
        // x - α^i, constant term first
        let factor = Poly::from_coefficients(vec![field.alpha_pow(i as isize), GF(1)]);
        g.mul(&factor, field)
    })
}

pub(crate) fn check_message_len(len: usize, nsym: usize) -> Result<(), Error> {
    if len + nsym > ORDER {
        Err(Error::MessageTooLong { len, nsym })
    } else {
        Ok(())
    }
}

/// Compute the `g.degree()` parity bytes for `message`.
pub fn parity(message: &[u8], g: &Poly, field: &Field) -> Result<Vec<u8>, Error> {
    let nsym = g.degree();
    check_message_len(message.len(), nsym)?;
    let shifted = Poly::from_highest_first(message).shift(nsym);
    let (_, rem) = shifted.divmod(g, field)?;

    // the remainder has degree < nsym, write it highest power first
    // and pad in front, for nsym = 0 it is the zero constant
    let mut parity = vec![0; nsym];
    for (i, c) in rem.coefficients().iter().take(nsym).enumerate() {
        parity[nsym - 1 - i] = c.0;
    }
    Ok(parity)
}

/// Encode `message` into the codeword `message ++ parity`.
pub fn encode(message: &[u8], g: &Poly, field: &Field) -> Result<Vec<u8>, Error> {
    let parity = parity(message, g, field)?;
    let mut codeword = Vec::with_capacity(message.len() + parity.len());
    codeword.extend_from_slice(message);
    codeword.extend_from_slice(&parity);
    Ok(codeword)
}

/// Encode `message` into a full block of 255 symbols, the message padded with
/// zeros in front.
pub fn encode_full(message: &[u8], g: &Poly, field: &Field) -> Result<Vec<u8>, Error> {
    let codeword = encode(message, g, field)?;
    let mut block = vec![0; ORDER - codeword.len()];
    block.extend_from_slice(&codeword);
    Ok(block)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn generator_small() {
    let field = Field::standard();
    assert_eq!(generator(0, field), Poly::one());
    assert_eq!(generator(2, field).to_highest_first(), vec![1, 6, 8]);
    assert_eq!(
        generator(4, field).to_highest_first(),
        vec![1, 30, 216, 231, 116]
    );
}

#[test]
fn generator_roots() {
    let field = Field::standard();
    for nsym in [1, 5, 10, 32, 254] {
        let g = generator(nsym, field);
        assert_eq!(g.degree(), nsym);
        assert_eq!(g.coefficient(nsym), GF(1));
        for i in 1..=nsym {
            assert_eq!(g.eval(field.alpha_pow(i as isize), field), GF(0));
        }
        assert_ne!(g.eval(field.alpha_pow(0), field), GF(0));
    }
}

#[test]
fn parity_block() {
    let field = Field::standard();
    let g = generator(4, field);
    let message = [32, 91, 11, 120, 209];
    assert_eq!(parity(&message, &g, field).unwrap(), vec![226, 54, 126, 182]);
    assert_eq!(
        encode(&message, &g, field).unwrap(),
        vec![32, 91, 11, 120, 209, 226, 54, 126, 182]
    );
}

#[test]
fn parity_text() {
    let field = Field::standard();
    let g = generator(10, field);
    let codeword = encode(b"hello world", &g, field).unwrap();
    assert_eq!(
        &codeword[11..],
        &[38, 25, 46, 178, 62, 184, 198, 125, 41, 172]
    );
}

#[test]
fn parity_is_padded() {
    let field = Field::standard();
    let g = generator(4, field);
    assert_eq!(parity(&[], &g, field).unwrap(), vec![0; 4]);
    assert_eq!(parity(&[0, 0, 0], &g, field).unwrap(), vec![0; 4]);
}

#[test]
fn no_parity_symbols() {
    let field = Field::standard();
    let g = generator(0, field);
    assert_eq!(parity(&[1, 2], &g, field), Ok(vec![]));
    assert_eq!(parity(&[], &g, field), Ok(vec![]));
    assert_eq!(encode(&[1, 2], &g, field), Ok(vec![1, 2]));
    assert_eq!(encode(&[7; 255], &g, field), Ok(vec![7; 255]));
    assert_eq!(encode_full(&[1, 2], &g, field).unwrap()[253..], [1, 2]);
}

#[test]
fn only_parity_symbols() {
    // g(x) = x^255 - 1 has every nonzero element as a root
    let field = Field::standard();
    let g = generator(255, field);
    let mut expected = vec![GF(0); 256];
    expected[0] = GF(1);
    expected[255] = GF(1);
    assert_eq!(g.coefficients(), &expected[..]);
    assert_eq!(encode(&[], &g, field), Ok(vec![0; 255]));
    assert_eq!(
        encode(&[1], &g, field),
        Err(Error::MessageTooLong { len: 1, nsym: 255 })
    );
}

#[test]
fn full_block() {
    let field = Field::standard();
    let g = generator(4, field);
    let message = [32, 91, 11, 120, 209];
    let block = encode_full(&message, &g, field).unwrap();
    assert_eq!(block.len(), 255);
    assert!(block[..246].iter().all(|b| *b == 0));
    assert_eq!(&block[246..], &encode(&message, &g, field).unwrap()[..]);
}

#[test]
fn message_too_long() {
    let field = Field::standard();
    let g = generator(4, field);
    assert!(encode(&[7; 251], &g, field).is_ok());
    assert_eq!(
        encode(&[7; 252], &g, field),
        Err(Error::MessageTooLong { len: 252, nsym: 4 })
    );
}
