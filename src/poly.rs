//! Polynomials with coefficients in GF(256).
//!
//! A [`Poly`] stores its coefficients with the constant term first, so the
//! coefficient at index i belongs to x^i. This is the only order used inside
//! the crate. Codewords are written the other way around (the first byte is
//! the coefficient of the highest power), the conversion is done explicitly
//! with [`Poly::from_highest_first`] and [`Poly::to_highest_first`].
//!
//! A polynomial always has at least one coefficient and no zero coefficients
//! above its degree. The zero polynomial is `[0]`.
use alloc::{vec, vec::Vec};
use core::fmt;
use core::ops::Add;

use crate::galois::{Field, FieldError, GF};

#[derive(Clone, PartialEq, Eq)]
pub struct Poly(Vec<GF>);

impl Poly {
    pub fn zero() -> Self {
        Poly(vec![GF(0)])
    }

    pub fn one() -> Self {
        Poly(vec![GF(1)])
    }

    /// Create a polynomial from coefficients given constant term first.
    pub fn from_coefficients(coefficients: Vec<GF>) -> Self {
        let mut p = Poly(coefficients);
        p.trim();
        p
    }

    /// Create a polynomial from bytes given highest power first.
    pub fn from_highest_first(bytes: &[u8]) -> Self {
        Self::from_coefficients(bytes.iter().rev().map(|b| GF(*b)).collect())
    }

    /// Write the coefficients as bytes, highest power first.
    pub fn to_highest_first(&self) -> Vec<u8> {
        self.0.iter().rev().map(|c| c.0).collect()
    }

    /// The coefficients, constant term first.
    pub fn coefficients(&self) -> &[GF] {
        &self.0
    }

    /// Coefficient of x^i, zero above the degree.
    pub fn coefficient(&self, i: usize) -> GF {
        self.0.get(i).cloned().unwrap_or(GF(0))
    }

    /// The degree, where the zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_zero()
    }

    /// Remove zero coefficients above the degree, keep at least one.
    fn trim(&mut self) {
        while self.0.len() > 1 && self.0.last().is_some_and(|c| c.is_zero()) {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(GF(0));
        }
    }

    pub fn mul(&self, rhs: &Poly, field: &Field) -> Poly {
        let mut out = vec![GF(0); self.0.len() + rhs.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (o, b) in out[i..].iter_mut().zip(rhs.0.iter()) {
                *o += field.mul(*a, *b);
            }
        }
        Self::from_coefficients(out)
    }

    pub fn scale(&self, s: GF, field: &Field) -> Poly {
        Self::from_coefficients(self.0.iter().map(|c| field.mul(*c, s)).collect())
    }

    /// Multiply by x^k.
    pub fn shift(&self, k: usize) -> Poly {
        if self.is_zero() {
            return Poly::zero();
        }
        let mut coefficients = vec![GF(0); k];
        coefficients.extend_from_slice(&self.0);
        Poly(coefficients)
    }

    /// Reduce modulo x^k, i.e., keep the k lowest coefficients.
    pub fn truncate(&self, k: usize) -> Poly {
        Self::from_coefficients(self.0.iter().take(k).cloned().collect())
    }

    /// Formal derivative.
    ///
    /// The coefficient of x^i becomes i times the coefficient of x^(i-1).
    /// In characteristic 2 this keeps the odd powers and removes the even ones.
    pub fn derivative(&self) -> Poly {
        Self::from_coefficients(
            self.0
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| if i % 2 == 1 { *c } else { GF(0) })
                .collect(),
        )
    }

    /// Long division, returns quotient and remainder.
    pub fn divmod(&self, divisor: &Poly, field: &Field) -> Result<(Poly, Poly), FieldError> {
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let d = divisor.degree();
        if self.degree() < d {
            return Ok((Poly::zero(), self.clone()));
        }
        let lead = divisor.0[d];
        let mut rem = self.0.clone();
        let mut quotient = vec![GF(0); self.degree() - d + 1];
        // eliminate the highest remaining power in each step
        for i in (0..quotient.len()).rev() {
            let c = rem[i + d];
            if c.is_zero() {
                continue;
            }
            let factor = field.quot(c, lead);
            quotient[i] = factor;
            for (r, g) in rem[i..].iter_mut().zip(divisor.0.iter()) {
                *r -= field.mul(*g, factor);
            }
        }
        rem.truncate(d.max(1));
        Ok((Self::from_coefficients(quotient), Self::from_coefficients(rem)))
    }

    /// Evaluate at `x` using Horner's method.
    pub fn eval(&self, x: GF, field: &Field) -> GF {
        self.0
            .iter()
            .rev()
            .fold(GF(0), |acc, c| field.mul(acc, x) + *c)
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let (long, short) = if self.0.len() >= rhs.0.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut sum = long.0.clone();
        for (s, c) in sum.iter_mut().zip(short.0.iter()) {
            *s += *c;
        }
        Poly::from_coefficients(sum)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|c| c.0)).finish()
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn p(c: &[u8]) -> Poly {
    Poly::from_coefficients(c.iter().map(|x| GF(*x)).collect())
}

#[test]
fn test_trim() {
    assert_eq!(p(&[1, 2, 0, 0]).coefficients(), &[GF(1), GF(2)]);
    assert_eq!(p(&[0, 0]), Poly::zero());
    assert_eq!(p(&[]), Poly::zero());
    assert_eq!(p(&[0, 0, 3]).degree(), 2);
    assert!(p(&[0]).is_zero());
}

#[test]
fn test_order_conversion() {
    let poly = Poly::from_highest_first(&[0, 0, 1, 30, 216]);
    assert_eq!(poly, p(&[216, 30, 1]));
    assert_eq!(poly.to_highest_first(), vec![1, 30, 216]);
    assert_eq!(poly.coefficient(2), GF(1));
    assert_eq!(poly.coefficient(7), GF(0));
}

#[test]
fn test_add() {
    assert_eq!(&p(&[1, 2, 3]) + &p(&[1, 2]), p(&[0, 0, 3]));
    assert_eq!(&p(&[5]) + &p(&[1, 2, 3]), p(&[4, 2, 3]));
    assert_eq!(&p(&[1, 2, 3]) + &p(&[1, 2, 3]), Poly::zero());
}

#[test]
fn test_mul() {
    let field = Field::standard();
    // (1 + 2x)(3 + 4x) = 3 + 2x + 8x^2
    assert_eq!(p(&[1, 2]).mul(&p(&[3, 4]), field), p(&[3, 2, 8]));
    assert_eq!(p(&[1, 2]).mul(&Poly::zero(), field), Poly::zero());
    assert_eq!(p(&[7, 9]).mul(&Poly::one(), field), p(&[7, 9]));
}

#[test]
fn test_scale_shift_truncate() {
    let field = Field::standard();
    assert_eq!(p(&[1, 3]).scale(GF(7), field), p(&[7, 9]));
    assert_eq!(p(&[1, 3]).scale(GF(0), field), Poly::zero());
    assert_eq!(p(&[1, 3]).shift(2), p(&[0, 0, 1, 3]));
    assert_eq!(Poly::zero().shift(3), Poly::zero());
    assert_eq!(p(&[1, 3, 0, 5]).truncate(3), p(&[1, 3]));
    assert_eq!(p(&[1, 3]).truncate(0), Poly::zero());
}

#[test]
fn test_derivative() {
    assert_eq!(p(&[1, 72, 58]).derivative(), p(&[72]));
    assert_eq!(p(&[5, 1, 2, 3, 4]).derivative(), p(&[1, 0, 3]));
    assert_eq!(p(&[5]).derivative(), Poly::zero());
}

#[test]
fn test_divmod() {
    let field = Field::standard();
    let a = p(&[3, 2, 8]);
    let (q, r) = a.divmod(&p(&[1, 2]), field).unwrap();
    assert_eq!(q, p(&[3, 4]));
    assert_eq!(r, Poly::zero());

    // dividend of lower degree is returned as remainder
    let (q, r) = p(&[1, 2]).divmod(&a, field).unwrap();
    assert_eq!(q, Poly::zero());
    assert_eq!(r, p(&[1, 2]));

    // constant divisor
    let (q, r) = a.divmod(&p(&[2]), field).unwrap();
    assert_eq!(q.scale(GF(2), field), a);
    assert_eq!(r, Poly::zero());

    assert_eq!(
        a.divmod(&Poly::zero(), field),
        Err(FieldError::DivisionByZero)
    );
}

#[test]
fn test_divmod_with_remainder() {
    let field = Field::standard();
    let a = p(&[9, 3, 2, 8, 1]);
    let b = p(&[4, 0, 7]);
    let (q, r) = a.divmod(&b, field).unwrap();
    assert!(r.degree() < b.degree());
    assert_eq!(&q.mul(&b, field) + &r, a);
}

#[test]
fn test_eval() {
    let field = Field::standard();
    // 3 + 2x + 8x^2 at x = 0 and x = 1
    let a = p(&[3, 2, 8]);
    assert_eq!(a.eval(GF(0), field), GF(3));
    assert_eq!(a.eval(GF(1), field), GF(3 ^ 2 ^ 8));
    let x = GF(2);
    let expected = GF(3) + field.mul(GF(2), x) + field.mul(GF(8), field.mul(x, x));
    assert_eq!(a.eval(x, field), expected);
}
