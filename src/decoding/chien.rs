use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::galois::{Field, GF, ORDER};
use crate::poly::Poly;

/// Find the block positions whose inverse power is a root of `sigma`.
///
/// Position i stands for α^i, the power of the byte at index n - 1 - i.
/// Only the `n` positions of the block are searched, roots in the
/// virtual zero padding of a shortened block are not reported.
pub fn search(sigma: &Poly, n: usize, field: &Field) -> ArrayVec<usize, ORDER> {
    debug_assert!(n <= ORDER);
    let mut roots = ArrayVec::new();

    // gamma[j] = σ_j α^(-ij) in step i, so the sum is σ(α^(-i))
    let mut gamma: Vec<GF> = sigma.coefficients().to_vec();
    let step: Vec<GF> = (0..gamma.len())
        .map(|j| field.alpha_pow(-(j as isize)))
        .collect();
    for i in 0..n.min(ORDER) {
        if i > 0 {
            for (g, s) in gamma.iter_mut().zip(step.iter()) {
                *g = field.mul(*g, *s);
            }
        }
        if gamma.iter().cloned().sum::<GF>().is_zero() {
            roots.push(i);
        }
    }
    roots
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn roots_two_errors() {
    let field = Field::standard();
    let sigma = Poly::from_coefficients(vec![GF(1), GF(72), GF(58)]);
    assert_eq!(&search(&sigma, 9, field)[..], &[3, 6]);
}

#[test]
fn roots_outside_block() {
    let field = Field::standard();
    let sigma = Poly::from_coefficients(vec![GF(1), GF(240), GF(242)]);
    assert!(search(&sigma, 9, field).is_empty());
}

#[test]
fn roots_match_evaluation() {
    let field = Field::standard();
    // σ(x) = (1 + α^4 x)(1 + α^100 x)(1 + α^254 x)
    let sigma = [4, 100, 254].iter().fold(Poly::one(), |acc, p| {
        acc.mul(
            &Poly::from_coefficients(vec![GF(1), field.alpha_pow(*p)]),
            field,
        )
    });
    assert_eq!(&search(&sigma, 255, field)[..], &[4, 100, 254]);
    assert_eq!(&search(&sigma, 101, field)[..], &[4, 100]);
    for i in 0..255 {
        let expected = sigma.eval(field.alpha_pow(-i), field).is_zero();
        assert_eq!(search(&sigma, 255, field).contains(&(i as usize)), expected);
    }
}

#[test]
fn constant_has_no_roots() {
    let field = Field::standard();
    assert!(search(&Poly::one(), 255, field).is_empty());
}
