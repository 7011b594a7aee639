// src/vector.rs

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{GaError, GaResult};
use crate::scalar::Scalar;

/// A 2-D Euclidean vector over a scalar field `T` (numeric `f64` by
/// default, or [`Expr`](crate::expr::Expr) for exact symbolic work).
///
/// The shape is fixed at compile time, so operations between `Vec2`
/// values never need a runtime shape check. Dynamic-length input enters
/// through [`Vec2::from_slice`], the one place a shape can be wrong.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Clone> Vec2<T> {
    /// Validates a dynamic sequence at the untrusted boundary: exactly
    /// two components convert, anything else fails with
    /// [`GaError::InvalidShape`] carrying the length found.
    pub fn from_slice(components: &[T]) -> GaResult<Self> {
        match components {
            [x, y] => Ok(Self::new(x.clone(), y.clone())),
            _ => Err(GaError::InvalidShape {
                got: components.len(),
            }),
        }
    }
}

impl<'a, T: Clone> TryFrom<&'a [T]> for Vec2<T> {
    type Error = GaError;

    fn try_from(components: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl<T: Scalar> Vec2<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The basis vector e₁.
    pub fn e1() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The basis vector e₂.
    pub fn e2() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// Rotation by +π/2: `(x, y)` to `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self::new(-self.y.clone(), self.x.clone())
    }

    pub fn scale(&self, s: T) -> Self {
        Self::new(self.x.clone() * s.clone(), self.y.clone() * s)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl Vec2<f64> {
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Vec2<T>;
    fn add(self, rhs: Vec2<T>) -> Vec2<T> {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Vec2<T>;
    fn sub(self, rhs: Vec2<T>) -> Vec2<T> {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Vec2<T>;
    fn neg(self) -> Vec2<T> {
        Vec2::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;
    fn mul(self, rhs: T) -> Vec2<T> {
        Vec2::new(self.x * rhs.clone(), self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Vec2<T>;
    fn div(self, rhs: T) -> Vec2<T> {
        Vec2::new(self.x / rhs.clone(), self.y / rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A tiny wrapper for printing a `Vec2<f64>` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vec2<f64>, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "({x:.dec$}, {y:.dec$})", x = v.x, y = v.y, dec = dec)
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vec2<f64>` for pretty-printing with `decimals` digits.
    pub fn new(v: &'a Vec2<f64>, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
