//! Arithmetic in GF(256), the field of 256 elements.
//!
//! An element is stored as an u8. Its bits are the coefficients of a
//! polynomial of degree at most 7 with the least significant bit being the
//! coefficient for 1. For example:
//!
//! > 29 = 0b00011101 = x^4 + x^3 + x^2 + 1.
//!
//! Addition is done coefficient by coefficient, which is just XOR. Every
//! element is its own additive inverse, so subtraction is XOR as well.
//!
//! Multiplication is defined modulo a fixed polynomial of degree 8, the
//! primitive polynomial. The default is 0x11D = x^8 + x^4 + x^3 + x^2 + 1.
//! For a primitive polynomial the powers 1, x, x^2, ..., x^254 run through all
//! nonzero elements, so we can identify every nonzero element with its power
//! of α = x. Multiplying a and b then means adding their logarithms and
//! looking up the resulting power. The two lookup tables for this are kept in
//! a [`Field`] value, so fields for different primitive polynomials can
//! exist next to each other.
//!
//! The element type [`GF`] only implements the table free operations as
//! operators. Everything involving the tables goes through a [`Field`].
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// The primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Size of the multiplicative group.
pub const ORDER: usize = 255;

/// The antilog table is doubled so that the sum of two logarithms can be
/// looked up without reduction modulo 255.
const EXP_LEN: usize = 2 * ORDER + 1;

static STANDARD: Field = match Field::build(PRIMITIVE_POLY) {
    Ok(field) => field,
    Err(_) => panic!("0x11D is primitive"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Division by the zero element.
    #[error("division by zero")]
    DivisionByZero,
    /// The polynomial does not have degree 8 or x does not generate the
    /// multiplicative group modulo it.
    #[error("{0:#x} is not a primitive polynomial of degree 8")]
    NotPrimitive(u16),
}

/// An element of GF(256).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GF(pub u8);

impl GF {
    pub const ZERO: GF = GF(0);
    pub const ONE: GF = GF(1);

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for GF {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}₂₅₆", self.0)
    }
}

// Addition and subtraction coincide in characteristic 2, both are XOR.
macro_rules! xor_ops {
    ($($op:ident :: $method:ident, $op_assign:ident :: $method_assign:ident);*) => {$(
        impl $op for GF {
            type Output = GF;

            fn $method(self, other: GF) -> GF {
                GF(self.0 ^ other.0)
            }
        }

        impl $op_assign for GF {
            fn $method_assign(&mut self, other: GF) {
                self.0 ^= other.0;
            }
        }
    )*};
}

xor_ops!(Add::add, AddAssign::add_assign; Sub::sub, SubAssign::sub_assign);

impl Neg for GF {
    type Output = GF;

    /// Every element is its own additive inverse.
    fn neg(self) -> GF {
        self
    }
}

impl From<u8> for GF {
    fn from(i: u8) -> Self {
        GF(i)
    }
}

impl From<GF> for u8 {
    fn from(a: GF) -> u8 {
        a.0
    }
}

impl Sum for GF {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GF(0), |a, b| a + b)
    }
}

/// Log and antilog tables for GF(256) with a fixed primitive polynomial.
///
/// The tables are immutable once built. Share a field by reference between
/// all encoders and decoders using it.
#[derive(Clone)]
pub struct Field {
    poly: u16,
    /// exp[i] = α^i for i in 0..511, exp[i] == exp[i mod 255].
    exp: [u8; EXP_LEN],
    /// log[α^i] = i, log[0] is never read.
    log: [u8; 256],
}

impl Field {
    /// Build the tables for `poly`, e.g. [`PRIMITIVE_POLY`].
    pub fn new(poly: u16) -> Result<Self, FieldError> {
        Self::build(poly)
    }

    /// The field for the primitive polynomial 0x11D, computed at compile time.
    pub fn standard() -> &'static Field {
        &STANDARD
    }

    const fn build(poly: u16) -> Result<Self, FieldError> {
        if poly < 0x100 || poly > 0x1FF {
            return Err(FieldError::NotPrimitive(poly));
        }
        let mut exp = [0u8; EXP_LEN];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        let mut i = 0;
        while i < ORDER {
            // x must not come back to 1 (or reach 0) before all 255 nonzero
            // elements have been visited
            if x == 0 || (i > 0 && x == 1) {
                return Err(FieldError::NotPrimitive(poly));
            }
            exp[i] = x as u8;
            log[x as usize] = i as u8;

            // multiply by α = x
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= poly;
            }
            i += 1;
        }
        if x != 1 {
            return Err(FieldError::NotPrimitive(poly));
        }
        while i < EXP_LEN {
            exp[i] = exp[i - ORDER];
            i += 1;
        }
        Ok(Field { poly, exp, log })
    }

    /// The primitive polynomial defining multiplication.
    pub fn primitive_poly(&self) -> u16 {
        self.poly
    }

    /// The logarithm of `a` to the base α, `None` for zero.
    pub fn log(&self, a: GF) -> Option<u8> {
        if a.is_zero() {
            None
        } else {
            Some(self.log[a.0 as usize])
        }
    }

    pub fn mul(&self, a: GF, b: GF) -> GF {
        if a.is_zero() || b.is_zero() {
            return GF(0);
        }
        let i = self.log[a.0 as usize] as usize + self.log[b.0 as usize] as usize;
        GF(self.exp[i])
    }

    pub fn div(&self, a: GF, b: GF) -> Result<GF, FieldError> {
        if b.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.quot(a, b))
    }

    /// Division for callers that guarantee a nonzero divisor.
    pub(crate) fn quot(&self, a: GF, b: GF) -> GF {
        assert!(!b.is_zero(), "division by zero");
        if a.is_zero() {
            return GF(0);
        }
        let i = self.log[a.0 as usize] as usize + ORDER - self.log[b.0 as usize] as usize;
        GF(self.exp[i])
    }

    pub fn inv(&self, a: GF) -> Result<GF, FieldError> {
        self.div(GF(1), a)
    }

    /// Compute α^power. Negative powers give the inverse α^(255 - |power|).
    pub fn alpha_pow(&self, power: isize) -> GF {
        GF(self.exp[power.rem_euclid(ORDER as isize) as usize])
    }

    /// Compute a^power with 0^0 = 1.
    pub fn pow(&self, a: GF, power: usize) -> GF {
        match self.log(a) {
            None if power == 0 => GF(1),
            None => GF(0),
            Some(l) => GF(self.exp[(l as usize * (power % ORDER)) % ORDER]),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Field")
            .field("poly", &format_args!("{:#x}", self.poly))
            .finish()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.poly == other.poly
    }
}

impl Eq for Field {}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn sanity_check_tables() {
    use std::collections::HashSet;

    let field = Field::standard();
    let exp: HashSet<u8> = field.exp[..ORDER].iter().cloned().collect();
    assert_eq!(exp.len(), ORDER);
    assert!(!exp.contains(&0));

    for i in 0..ORDER {
        assert_eq!(i, field.log[field.exp[i] as usize] as usize);
        assert_eq!(i + 1, field.exp[field.log[i + 1] as usize] as usize);
    }
    for i in ORDER..EXP_LEN {
        assert_eq!(field.exp[i], field.exp[i % ORDER]);
    }
}

#[test]
fn gf256_mul() {
    let field = Field::standard();
    assert_eq!(field.mul(GF(123), GF(1)), GF(123));
    assert_eq!(field.mul(GF(234), GF(0)), GF(0));
    assert_eq!(field.mul(GF(0), GF(23)), GF(0));
    assert_eq!(field.mul(GF(3), GF(7)), GF(9));
    let product = [4, 8, 16, 32]
        .iter()
        .fold(GF(2), |acc, b| field.mul(acc, GF(*b)));
    assert_eq!(product, GF(38));
}

#[test]
fn gf256_div_mul() {
    let field = Field::standard();
    for a in 0..=255 {
        for b in 1..=255 {
            let a_div_b = field.div(GF(a), GF(b)).unwrap();
            assert_eq!(field.mul(a_div_b, GF(b)), GF(a));
        }
    }
    assert_eq!(field.div(GF(38), GF(32)), Ok(GF(116)));
}

#[test]
fn gf256_inv() {
    let field = Field::standard();
    for a in 1..=255 {
        let inv = field.inv(GF(a)).unwrap();
        assert_eq!(field.mul(GF(a), inv), GF(1));
    }
    assert_eq!(field.inv(GF(2)), Ok(GF(142)));
    assert_eq!(field.inv(GF(3)), Ok(GF(244)));
}

#[test]
fn gf256_div_by_zero() {
    let field = Field::standard();
    assert_eq!(field.div(GF(7), GF(0)), Err(FieldError::DivisionByZero));
    assert_eq!(field.inv(GF(0)), Err(FieldError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn gf256_quot_by_zero_panics() {
    Field::standard().quot(GF(1), GF(0));
}

#[test]
fn test_alpha_pow() {
    let field = Field::standard();
    assert_eq!(field.alpha_pow(0), GF(1));
    assert_eq!(field.alpha_pow(1), GF(2));
    assert_eq!(field.alpha_pow(8), GF(29));
    assert_eq!(field.alpha_pow(255), GF(1));
    assert_eq!(field.alpha_pow(-1), GF(142));
    for p in 0..600 {
        let a = field.alpha_pow(p);
        assert_eq!(field.mul(a, field.alpha_pow(-p)), GF(1));
        assert_eq!(a, field.pow(GF(2), p as usize));
    }
}

#[test]
fn test_pow_and_log() {
    let field = Field::standard();
    assert_eq!(field.pow(GF(0), 0), GF(1));
    assert_eq!(field.pow(GF(0), 3), GF(0));
    assert_eq!(field.pow(GF(7), 0), GF(1));
    assert_eq!(field.pow(GF(7), 2), field.mul(GF(7), GF(7)));
    assert_eq!(field.log(GF(0)), None);
    assert_eq!(field.log(GF(1)), Some(0));
    assert_eq!(field.log(GF(29)), Some(8));
}

#[test]
fn test_neg() {
    for a in 0..=255 {
        let a = GF(a);
        assert_eq!(a + -a, GF(0), "{:?}", a);
        assert_eq!(a - a, GF(0));
    }
}

#[test]
fn add_sub_are_xor() {
    let mut a = GF(0b1010_0101);
    assert_eq!(a + GF(0b1111_0000), GF(0b0101_0101));
    assert_eq!(a - GF(0b1111_0000), GF(0b0101_0101));
    a += GF(0x0F);
    assert_eq!(a, GF(0b1010_1010));
    a -= GF(0x0F);
    assert_eq!(a, GF(0b1010_0101));
    assert_eq!(format!("{:?}", GF(38)), "38₂₅₆");
}

#[test]
fn other_primitive_polys() {
    // 0x12D is the Data Matrix field
    let field = Field::new(0x12D).unwrap();
    assert_eq!(field.primitive_poly(), 0x12D);
    assert_eq!(field.alpha_pow(8), GF(0x2D));
    assert_ne!(&field, Field::standard());
}

#[test]
fn reject_non_primitive() {
    // irreducible, but x has order 51
    assert_eq!(Field::new(0x11B).unwrap_err(), FieldError::NotPrimitive(0x11B));
    // reducible
    assert_eq!(Field::new(0x100).unwrap_err(), FieldError::NotPrimitive(0x100));
    // wrong degree
    assert_eq!(Field::new(0x1D).unwrap_err(), FieldError::NotPrimitive(0x1D));
    assert_eq!(Field::new(0x211).unwrap_err(), FieldError::NotPrimitive(0x211));
}
