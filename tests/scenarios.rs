use enum_iterator::{all, Sequence};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use reed_solomon_bm::decoding::syndromes;
use reed_solomon_bm::{
    decode, encode, Codec, Error, Failure, Field, FieldError, Outcome, Poly, GF,
};

const MESSAGE: [u8; 5] = [32, 91, 11, 120, 209];

/// All primitive polynomials of degree 8.
#[derive(Debug, Clone, Copy, PartialEq, Sequence)]
enum Primitive {
    P11D,
    P12B,
    P12D,
    P14D,
    P15F,
    P163,
    P165,
    P169,
    P171,
    P187,
    P18D,
    P1A9,
    P1C3,
    P1CF,
    P1E7,
    P1F5,
}

impl Primitive {
    fn poly(self) -> u16 {
        match self {
            Primitive::P11D => 0x11D,
            Primitive::P12B => 0x12B,
            Primitive::P12D => 0x12D,
            Primitive::P14D => 0x14D,
            Primitive::P15F => 0x15F,
            Primitive::P163 => 0x163,
            Primitive::P165 => 0x165,
            Primitive::P169 => 0x169,
            Primitive::P171 => 0x171,
            Primitive::P187 => 0x187,
            Primitive::P18D => 0x18D,
            Primitive::P1A9 => 0x1A9,
            Primitive::P1C3 => 0x1C3,
            Primitive::P1CF => 0x1CF,
            Primitive::P1E7 => 0x1E7,
            Primitive::P1F5 => 0x1F5,
        }
    }
}

#[test]
fn two_errors_are_corrected() {
    let codeword = encode(&MESSAGE, 4).unwrap();
    assert_eq!(codeword.len(), 9);
    let mut received = codeword.clone();
    received[2] ^= 5;
    received[5] ^= 3;

    let decoded = decode(&received, 4).unwrap();
    assert_eq!(decoded.outcome, Outcome::Corrected);
    assert_eq!(decoded.error_positions.len(), 2);
    assert_eq!(&decoded.word[..5], &MESSAGE);
    assert_eq!(decoded.word, codeword);
}

#[test]
fn no_errors() {
    let codeword = encode(&MESSAGE, 4).unwrap();
    let decoded = decode(&codeword, 4).unwrap();
    assert!(decoded.is_corrected());
    assert!(decoded.error_positions.is_empty());
    assert!(decoded.error_magnitudes.is_empty());
    assert_eq!(decoded.word, codeword);
}

#[test]
fn three_errors_are_detected_or_verified() {
    let codeword = encode(&MESSAGE, 4).unwrap();
    let mut rng = StdRng::seed_from_u64(0x11D);
    for _ in 0..500 {
        let mut received = codeword.clone();
        for i in index::sample(&mut rng, codeword.len(), 3) {
            received[i] ^= rng.random_range(1..=255u8);
        }
        let decoded = decode(&received, 4).unwrap();
        if decoded.is_corrected() {
            let check = syndromes::compute(&decoded.word, 4, Field::standard());
            assert!(syndromes::all_zero(&check));
            assert_ne!(decoded.word, codeword);
        } else {
            assert_eq!(decoded.word, received);
        }
    }
}

#[test]
fn random_sweep() {
    let mut rng = StdRng::seed_from_u64(7);
    for nsym in [2, 4, 8, 16, 32] {
        let codec = Codec::new(nsym).unwrap();
        for _ in 0..50 {
            let len = rng.random_range(0..=codec.max_message_len());
            let message: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            let codeword = codec.encode(&message).unwrap();
            for count in 0..=nsym + 1 {
                let count = count.min(codeword.len());
                let mut received = codeword.clone();
                for i in index::sample(&mut rng, codeword.len(), count) {
                    received[i] ^= rng.random_range(1..=255u8);
                }
                let decoded = codec.decode(&received).unwrap();
                if count <= codec.capacity() {
                    assert!(decoded.is_corrected(), "nsym {} count {}", nsym, count);
                    assert_eq!(decoded.word, codeword);
                    assert_eq!(decoded.error_positions.len(), count);
                } else if !decoded.is_corrected() {
                    assert_eq!(decoded.word, received);
                }
            }
        }
    }
}

#[test]
fn full_block_codewords() {
    let codec = Codec::new(16).unwrap();
    let message: Vec<u8> = (0..239u32).map(|i| (i * 7 % 256) as u8).collect();
    let block = codec.encode_full(&message).unwrap();
    assert_eq!(block.len(), 255);
    let mut received = block.clone();
    for i in [0, 50, 100, 150, 200, 238, 239, 245] {
        received[i] = !received[i];
    }
    let decoded = codec.decode(&received).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.word, block);
    let mut positions = decoded.error_positions.clone();
    positions.sort();
    assert_eq!(positions, vec![0, 50, 100, 150, 200, 238, 239, 245]);
}

#[test]
fn errors_in_padding_are_not_applied() {
    let codec = Codec::new(4).unwrap();
    let field = codec.field();
    let codeword = codec.encode(&MESSAGE).unwrap();
    let n = codeword.len();

    // Error pattern with the power 1 and the power 100, which lies in the
    // zero padding of the 9 symbol block. Replacing x^100 by its remainder
    // modulo g gives a block with the same syndromes.
    let far = Poly::from_coefficients(vec![GF(0x33)]).shift(100);
    let (_, far_rem) = far.divmod(codec.generator(), field).unwrap();
    let mut received = codeword.clone();
    received[n - 1 - 1] ^= 0x0F;
    for (i, c) in far_rem.coefficients().iter().enumerate() {
        received[n - 1 - i] ^= c.0;
    }

    let decoded = codec.decode(&received).unwrap();
    assert_eq!(decoded.locator.degree(), 2);
    assert_eq!(
        decoded.outcome,
        Outcome::Uncorrected(Failure::RootCountMismatch {
            degree: 2,
            roots: 1
        })
    );
    assert_eq!(decoded.word, received);

    // the full block sees both errors and corrects them
    let mut block = codec.encode_full(&MESSAGE).unwrap();
    block[254 - 1] ^= 0x0F;
    block[254 - 100] ^= 0x33;
    let decoded = codec.decode(&block).unwrap();
    assert!(decoded.is_corrected());
    assert_eq!(decoded.error_positions, vec![253, 154]);
    assert_eq!(decoded.word, codec.encode_full(&MESSAGE).unwrap());
}

#[test]
fn all_primitive_polynomials() {
    let mut accepted = 0;
    for poly in 0x100..0x200u16 {
        match Field::new(poly) {
            Ok(_) => accepted += 1,
            Err(err) => assert_eq!(err, FieldError::NotPrimitive(poly)),
        }
    }
    assert_eq!(accepted, all::<Primitive>().count());

    for primitive in all::<Primitive>() {
        let field = Field::new(primitive.poly()).unwrap();
        let codec = Codec::with_field(&field, 8).unwrap();
        let codeword = codec.encode(b"reed solomon").unwrap();
        let mut received = codeword.clone();
        received[1] ^= 0x42;
        received[4] = 0;
        received[13] ^= 0x01;
        received[19] ^= 0xFF;
        let decoded = codec.decode(&received).unwrap();
        assert!(decoded.is_corrected(), "{:?}", primitive);
        assert_eq!(decoded.word, codeword, "{:?}", primitive);
        for i in 0..=255u8 {
            assert_eq!(field.mul(GF(i), GF(1)), GF(i));
        }
    }
}

#[test]
fn configuration_errors() {
    assert_eq!(
        encode(&[0; 252], 4),
        Err(Error::MessageTooLong { len: 252, nsym: 4 })
    );
    assert_eq!(decode(&[0; 300], 4).unwrap_err(), Error::BlockTooLong(300));
    assert_eq!(decode(&[0; 10], 256).unwrap_err(), Error::InvalidParityCount(256));
    assert_eq!(
        encode(&[1], 255),
        Err(Error::MessageTooLong { len: 1, nsym: 255 })
    );
    assert_eq!(
        Error::MessageTooLong { len: 252, nsym: 4 }.to_string(),
        "message of 252 symbols with 4 parity symbols does not fit into 255 symbols"
    );
}
