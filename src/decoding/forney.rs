//! Forney's algorithm for the error values.
//!
//! With the error evaluator Ω(x) = S(x) σ(x) mod x^nsym the error at
//! position X = α^pos has the value
//!
//! > e = -Ω(X^-1) / σ'(X^-1) = Ω(X^-1) / σ'(X^-1).
//!
//! The derivative σ' can vanish at a root of σ only if σ has a double root,
//! which never happens for a correctable error pattern.
use alloc::vec::Vec;

use crate::galois::{Field, FieldError, GF};
use crate::poly::Poly;

/// Compute Ω(x) = S(x) σ(x) mod x^nsym where S_1 is the constant term of S.
pub fn evaluator(syn: &[GF], sigma: &Poly, field: &Field) -> Poly {
    Poly::from_coefficients(syn.to_vec())
        .mul(sigma, field)
        .truncate(syn.len())
}

/// Compute the error values for the positions in `roots`.
///
/// Fails with a division by zero if σ' vanishes at one of the roots.
pub fn magnitudes(
    omega: &Poly,
    sigma: &Poly,
    roots: &[usize],
    field: &Field,
) -> Result<Vec<GF>, FieldError> {
    let derivative = sigma.derivative();
    roots
        .iter()
        .map(|pos| {
            let x_inv = field.alpha_pow(-(*pos as isize));
            field.div(omega.eval(x_inv, field), derivative.eval(x_inv, field))
        })
        .collect()
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn two_error_values() {
    let field = Field::standard();
    let syn = [GF(69), GF(30), GF(215), GF(195)];
    let sigma = Poly::from_coefficients(vec![GF(1), GF(72), GF(58)]);
    let omega = evaluator(&syn, &sigma, field);
    assert!(omega.degree() < syn.len());
    let values = magnitudes(&omega, &sigma, &[3, 6], field).unwrap();
    assert_eq!(values, vec![GF(3), GF(5)]);
}

#[test]
fn single_error_value() {
    let field = Field::standard();
    let e = GF(201);
    let p = 40;
    let syn: Vec<GF> = (1..=4)
        .map(|j| field.mul(e, field.alpha_pow(p * j)))
        .collect();
    // σ(x) = 1 + α^p x
    let sigma = Poly::from_coefficients(vec![GF(1), field.alpha_pow(p)]);
    let omega = evaluator(&syn, &sigma, field);
    let values = magnitudes(&omega, &sigma, &[p as usize], field).unwrap();
    assert_eq!(values, vec![e]);
}

#[test]
fn degenerate_derivative() {
    let field = Field::standard();
    // σ(x) = (1 + x)^2 = 1 + x^2 has a double root and σ' = 0
    let sigma = Poly::from_coefficients(vec![GF(1), GF(0), GF(1)]);
    let omega = Poly::one();
    assert_eq!(
        magnitudes(&omega, &sigma, &[0], field),
        Err(FieldError::DivisionByZero)
    );
}
