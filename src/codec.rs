use alloc::vec::Vec;

use crate::decoding::{self, Decoded};
use crate::encoding;
use crate::error::Error;
use crate::galois::{Field, ORDER};
use crate::poly::Poly;

/// A Reed-Solomon code with `nsym` parity symbols over a [`Field`].
///
/// The generator polynomial is computed once when the codec is created.
/// A codec can be shared between threads.
///
/// ```
/// use reed_solomon_bm::Codec;
///
/// let codec = Codec::new(4).unwrap();
/// let mut codeword = codec.encode(&[32, 91, 11, 120, 209]).unwrap();
/// codeword[2] ^= 5;
/// codeword[5] ^= 3;
///
/// let decoded = codec.decode(&codeword).unwrap();
/// assert!(decoded.is_corrected());
/// assert_eq!(&decoded.word[..5], &[32, 91, 11, 120, 209]);
/// ```
#[derive(Debug, Clone)]
pub struct Codec<'f> {
    field: &'f Field,
    nsym: usize,
    generator: Poly,
}

impl Codec<'static> {
    /// Create a codec over the standard field with primitive polynomial 0x11D.
    pub fn new(nsym: usize) -> Result<Self, Error> {
        Self::with_field(Field::standard(), nsym)
    }
}

impl<'f> Codec<'f> {
    /// Create a codec over `field`.
    ///
    /// `nsym` can be anything from 0, no parity at all, up to 255, blocks
    /// made of parity symbols only.
    pub fn with_field(field: &'f Field, nsym: usize) -> Result<Self, Error> {
        if nsym > ORDER {
            return Err(Error::InvalidParityCount(nsym));
        }
        Ok(Self {
            field,
            nsym,
            generator: encoding::generator(nsym, field),
        })
    }

    pub fn field(&self) -> &'f Field {
        self.field
    }

    /// Number of parity symbols.
    pub fn nsym(&self) -> usize {
        self.nsym
    }

    /// The generator polynomial, constant term first.
    pub fn generator(&self) -> &Poly {
        &self.generator
    }

    /// Number of errors which can be corrected in a block.
    pub fn capacity(&self) -> usize {
        self.nsym / 2
    }

    pub fn max_message_len(&self) -> usize {
        ORDER - self.nsym
    }

    /// Compute only the parity symbols for `message`.
    pub fn parity(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        encoding::parity(message, &self.generator, self.field)
    }

    /// Encode `message` into a shortened codeword of `message.len() + nsym` symbols.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        encoding::encode(message, &self.generator, self.field)
    }

    /// Encode `message` into a block of 255 symbols, padded with zeros in front.
    pub fn encode_full(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        encoding::encode_full(message, &self.generator, self.field)
    }

    /// Correct errors in a received block.
    ///
    /// See [`decoding::decode`].
    pub fn decode(&self, received: &[u8]) -> Result<Decoded, Error> {
        decoding::decode(received, self.nsym, self.field)
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn parity_count_limits() {
    assert_eq!(Codec::new(256).unwrap_err(), Error::InvalidParityCount(256));
    let codec = Codec::new(254).unwrap();
    assert_eq!(codec.max_message_len(), 1);
    assert_eq!(codec.capacity(), 127);

    let codec = Codec::new(255).unwrap();
    assert_eq!(codec.max_message_len(), 0);
    assert_eq!(codec.encode(&[]), Ok(vec![0; 255]));
    let mut received = vec![0; 255];
    received[17] = 0xA5;
    let decoded = codec.decode(&received).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.word, vec![0; 255]);
    assert_eq!(decoded.error_positions, vec![17]);

    let codec = Codec::new(0).unwrap();
    assert_eq!(codec.capacity(), 0);
    assert_eq!(codec.encode(&[1, 2]), Ok(vec![1, 2]));
    let decoded = codec.decode(&[1, 2, 3]).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.word, vec![1, 2, 3]);
    assert!(decoded.syndromes.is_empty());
}

#[test]
fn generator_is_cached() {
    let codec = Codec::new(4).unwrap();
    assert_eq!(codec.nsym(), 4);
    assert_eq!(codec.generator().to_highest_first(), vec![1, 30, 216, 231, 116]);
    assert_eq!(codec.field(), Field::standard());
}

#[test]
fn encode_parity_and_full() {
    let codec = Codec::new(4).unwrap();
    let message = [32, 91, 11, 120, 209];
    let parity = codec.parity(&message).unwrap();
    let codeword = codec.encode(&message).unwrap();
    assert_eq!(&codeword[..5], &message);
    assert_eq!(&codeword[5..], &parity[..]);
    let full = codec.encode_full(&message).unwrap();
    assert_eq!(&full[255 - 9..], &codeword[..]);
}

#[test]
fn codec_with_other_field() {
    let field = Field::new(0x12D).unwrap();
    let codec = Codec::with_field(&field, 6).unwrap();
    let message = b"data matrix";
    let mut received = codec.encode(message).unwrap();
    received[0] ^= 0x11;
    received[7] ^= 0x80;
    received[15] ^= 0x01;
    let decoded = codec.decode(&received).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(&decoded.word[..message.len()], &message[..]);

    // codewords of one field are no codewords of the other
    let standard = Codec::new(6).unwrap();
    let codeword = codec.encode(message).unwrap();
    assert_ne!(standard.encode(message).unwrap(), codeword);
}

#[test]
fn codec_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Codec<'static>>();
    assert_send_sync::<Field>();
}
