use alloc::vec::Vec;

use crate::galois::{Field, GF, ORDER};

/// Compute the syndromes S_1, ..., S_nsym of a received block.
///
/// S_j is the received polynomial evaluated at α^j, where the byte at
/// index i is the coefficient of x^(n - 1 - i).
pub fn compute(received: &[u8], nsym: usize, field: &Field) -> Vec<GF> {
    let n = received.len();
    (1..=nsym)
        .map(|j| {
            received
                .iter()
                .enumerate()
                .filter(|(_, r)| **r != 0)
                .map(|(i, r)| {
                    let power = ((n - 1 - i) * j) % ORDER;
                    field.mul(GF(*r), field.alpha_pow(power as isize))
                })
                .sum()
        })
        .collect()
}

/// All syndromes are zero iff the block is a codeword.
pub fn all_zero(syndromes: &[GF]) -> bool {
    syndromes.iter().all(|s| s.is_zero())
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn syndromes_of_codeword() {
    let field = Field::standard();
    let codeword = [32, 91, 11, 120, 209, 226, 54, 126, 182];
    let s = compute(&codeword, 4, field);
    assert_eq!(s.len(), 4);
    assert!(all_zero(&s));
}

#[test]
fn syndromes_with_errors() {
    let field = Field::standard();
    let received = [32, 91, 11 ^ 5, 120, 209, 226 ^ 3, 54, 126, 182];
    let s = compute(&received, 4, field);
    assert_eq!(s, vec![GF(69), GF(30), GF(215), GF(195)]);
    assert!(!all_zero(&s));
}

#[test]
fn syndromes_are_evaluations() {
    let field = Field::standard();
    let received = [1, 2, 3, 4, 5];
    let s = compute(&received, 4, field);
    assert_eq!(s, vec![GF(1), GF(184), GF(92), GF(169)]);
    let poly = crate::poly::Poly::from_highest_first(&received);
    for (j, s) in s.iter().enumerate() {
        assert_eq!(poly.eval(field.alpha_pow(j as isize + 1), field), *s);
    }
}

#[test]
fn syndromes_of_empty_block() {
    let field = Field::standard();
    assert_eq!(compute(&[], 3, field), vec![GF(0); 3]);
    assert!(compute(&[1, 2], 0, field).is_empty());
}
