//! Property-based tests for the field, the polynomial engine and the codec.

use proptest::prelude::*;
use proptest::sample::Index;
use reed_solomon_bm::decoding::syndromes;
use reed_solomon_bm::{Codec, Field, Outcome, Poly, GF};

fn poly(coefficients: &[u8]) -> Poly {
    Poly::from_coefficients(coefficients.iter().map(|c| GF(*c)).collect())
}

/// A message and a number of parity symbols which fit into one block.
fn message_and_nsym(max_nsym: usize) -> impl Strategy<Value = (Vec<u8>, usize)> {
    (1..=max_nsym).prop_flat_map(|nsym| {
        (
            prop::collection::vec(any::<u8>(), 0..=255 - nsym),
            Just(nsym),
        )
    })
}

fn apply_errors(codeword: &[u8], errors: &[(Index, u8)]) -> Vec<u8> {
    let mut received = codeword.to_vec();
    for (idx, value) in errors {
        let i = idx.index(received.len());
        received[i] ^= *value;
    }
    received
}

proptest! {
    /// Property: every nonzero element has a multiplicative inverse
    #[test]
    fn prop_inverse(a in 1u8..=255) {
        let field = Field::standard();
        let inv = field.inv(GF(a)).unwrap();
        prop_assert_eq!(field.mul(GF(a), inv), GF(1));
    }

    /// Property: division undoes multiplication
    #[test]
    fn prop_div_mul(a in any::<u8>(), b in 1u8..=255) {
        let field = Field::standard();
        let product = field.mul(GF(a), GF(b));
        prop_assert_eq!(field.div(product, GF(b)).unwrap(), GF(a));
    }

    /// Property: multiplication distributes over addition
    #[test]
    fn prop_distributive(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let field = Field::standard();
        let left = field.mul(GF(a), GF(b) + GF(c));
        let right = field.mul(GF(a), GF(b)) + field.mul(GF(a), GF(c));
        prop_assert_eq!(left, right);
    }

    /// Property: dividing a product by one factor gives the other factor
    #[test]
    fn prop_poly_mul_divmod(
        a in prop::collection::vec(any::<u8>(), 1..24),
        b in prop::collection::vec(any::<u8>(), 1..24),
    ) {
        let field = Field::standard();
        let (a, b) = (poly(&a), poly(&b));
        prop_assume!(!b.is_zero());
        let (q, r) = a.mul(&b, field).divmod(&b, field).unwrap();
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
    }

    /// Property: quotient times divisor plus remainder is the dividend
    #[test]
    fn prop_divmod_identity(
        a in prop::collection::vec(any::<u8>(), 1..40),
        b in prop::collection::vec(any::<u8>(), 1..12),
    ) {
        let field = Field::standard();
        let (a, b) = (poly(&a), poly(&b));
        prop_assume!(!b.is_zero());
        let (q, r) = a.divmod(&b, field).unwrap();
        prop_assert!(r.is_zero() || r.degree() < b.degree());
        prop_assert_eq!(&q.mul(&b, field) + &r, a);
    }

    /// Property: evaluation is a ring homomorphism for multiplication
    #[test]
    fn prop_eval_mul(
        a in prop::collection::vec(any::<u8>(), 1..16),
        b in prop::collection::vec(any::<u8>(), 1..16),
        x in any::<u8>(),
    ) {
        let field = Field::standard();
        let (a, b) = (poly(&a), poly(&b));
        let x = GF(x);
        prop_assert_eq!(
            a.mul(&b, field).eval(x, field),
            field.mul(a.eval(x, field), b.eval(x, field))
        );
    }

    /// Property: a codeword without errors decodes to itself
    #[test]
    fn prop_roundtrip((message, nsym) in message_and_nsym(64)) {
        let codec = Codec::new(nsym).unwrap();
        let codeword = codec.encode(&message).unwrap();
        prop_assert_eq!(codeword.len(), message.len() + nsym);
        prop_assert_eq!(&codeword[..message.len()], &message[..]);

        let decoded = codec.decode(&codeword).unwrap();
        prop_assert!(decoded.is_corrected());
        prop_assert_eq!(&decoded.word[..message.len()], &message[..]);
        prop_assert!(decoded.error_positions.is_empty());
    }

    /// Property: up to nsym / 2 errors are always corrected
    #[test]
    fn prop_corrects_within_capacity(
        (message, nsym) in message_and_nsym(32),
        errors in prop::collection::vec((any::<Index>(), 1u8..=255), 0..=16),
    ) {
        let codec = Codec::new(nsym).unwrap();
        let codeword = codec.encode(&message).unwrap();
        let errors = &errors[..errors.len().min(codec.capacity())];
        let received = apply_errors(&codeword, errors);

        let decoded = codec.decode(&received).unwrap();
        prop_assert_eq!(decoded.outcome, Outcome::Corrected);
        prop_assert_eq!(&decoded.word, &codeword);
        for (pos, value) in decoded.error_positions.iter().zip(decoded.error_magnitudes.iter()) {
            prop_assert_eq!(received[*pos] ^ codeword[*pos], value.0);
        }
    }

    /// Property: beyond nsym / 2 errors the decoder either fails and returns
    /// the received block or returns a verified codeword
    #[test]
    fn prop_never_unverified(
        (message, nsym) in message_and_nsym(16),
        errors in prop::collection::vec((any::<Index>(), 1u8..=255), 1..=24),
    ) {
        let codec = Codec::new(nsym).unwrap();
        let codeword = codec.encode(&message).unwrap();
        let received = apply_errors(&codeword, &errors);

        let decoded = codec.decode(&received).unwrap();
        if decoded.is_corrected() {
            let check = syndromes::compute(&decoded.word, nsym, Field::standard());
            prop_assert!(syndromes::all_zero(&check));
            prop_assert!(decoded.error_positions.len() <= codec.capacity());
        } else {
            prop_assert_eq!(&decoded.word, &received);
            prop_assert!(decoded.error_positions.is_empty());
        }
    }
}
