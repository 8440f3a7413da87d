//! The Berlekamp-Massey (BM) algorithm for finding the error locator.
//!
//! The syndromes S_1, S_2, ... are read as the output of a linear feedback
//! shift register (LFSR). BM finds the shortest LFSR generating them, its
//! connection polynomial is the error locator σ(x) with σ(0) = 1 and the
//! length of the register is the number of errors.
use alloc::{vec, vec::Vec};

use crate::galois::{Field, GF};
use crate::poly::Poly;

/// Compute the error locator σ(x) for the syndromes `syn` = [S_1, ..., S_2t].
///
/// The degree of σ is the estimated number of errors. It can only be
/// trusted if it is at most t.
pub fn locator(syn: &[GF], field: &Field) -> Poly {
    let n = syn.len();
    let mut len_lfsr = 0; // current length of the LFSR
    let mut cur = vec![GF(0); n + 1]; // current connection polynomial
    cur[0] = GF(1);
    let mut prev = cur.clone(); // connection polynomial before last length change
    let mut shift = 1; // steps since the last length change
    let mut discrepancy_m = GF(1); // discrepancy at the last length change

    for k in 0..n {
        let discrepancy = syn[k]
            + (1..=len_lfsr)
                .map(|j| field.mul(cur[j], syn[k - j]))
                .sum::<GF>();
        if discrepancy.is_zero() {
            shift += 1;
            continue;
        }

        let before: Vec<GF> = cur.clone();
        // discrepancy_m is never zero, it starts at 1 and is only ever
        // replaced by a nonzero discrepancy
        let scale = field.quot(discrepancy, discrepancy_m);
        for (c, p) in cur[shift..].iter_mut().zip(prev.iter()) {
            *c -= field.mul(scale, *p);
        }

        if 2 * len_lfsr <= k {
            len_lfsr = k + 1 - len_lfsr;
            prev = before;
            discrepancy_m = discrepancy;
            shift = 1;
        } else {
            shift += 1;
        }
    }

    cur.truncate(len_lfsr + 1);
    Poly::from_coefficients(cur)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn gf(c: &[u8]) -> Vec<GF> {
    c.iter().map(|x| GF(*x)).collect()
}

#[test]
fn locator_two_errors() {
    let field = Field::standard();
    let sigma = locator(&gf(&[69, 30, 215, 195]), field);
    assert_eq!(sigma.coefficients(), &gf(&[1, 72, 58])[..]);
}

#[test]
fn locator_three_errors_with_four_syndromes() {
    // more errors than correctable, BM still returns a degree 2 LFSR
    let field = Field::standard();
    let sigma = locator(&gf(&[112, 26, 115, 170]), field);
    assert_eq!(sigma.coefficients(), &gf(&[1, 240, 242])[..]);
}

#[test]
fn locator_zero_syndromes() {
    let field = Field::standard();
    assert_eq!(locator(&gf(&[0, 0, 0, 0]), field), Poly::one());
    assert_eq!(locator(&[], field), Poly::one());
}

#[test]
fn locator_single_error() {
    // a single error e at power p gives S_j = e * α^(p j)
    let field = Field::standard();
    let e = GF(77);
    let p = 13;
    let syn: Vec<GF> = (1..=6)
        .map(|j| field.mul(e, field.alpha_pow(p * j)))
        .collect();
    let sigma = locator(&syn, field);
    assert_eq!(sigma.degree(), 1);
    assert_eq!(sigma.eval(field.alpha_pow(-p), field), GF(0));
}

#[test]
fn locator_generates_syndromes() {
    // the LFSR given by σ reproduces the syndromes after the first L
    let field = Field::standard();
    let syn = gf(&[12, 200, 7, 99, 31, 150, 4, 88]);
    let sigma = locator(&syn, field);
    let l = sigma.degree();
    for k in l..syn.len() {
        let predicted: GF = (1..=l)
            .map(|j| field.mul(sigma.coefficient(j), syn[k - j]))
            .sum();
        assert_eq!(predicted, syn[k], "k = {}", k);
    }
}
