// src/bivector.rs
use std::ops::{Add, Mul, Neg, Sub};

use crate::scalar::Scalar;
use crate::vector::Vec2;

/// A grade-2 multivector in 2-D: the single e12 component.
///
/// In two dimensions the bivector and the pseudoscalar coincide, so
/// this one coefficient carries the full signed-area information of a
/// wedge product.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bivector2<T = f64> {
    /// e12 component
    pub e12: T,
}

impl<T> Bivector2<T> {
    pub fn new(e12: T) -> Self {
        Self { e12 }
    }
}

impl<T: Scalar> Bivector2<T> {
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// a ∧ b
    pub fn from_wedge(a: &Vec2<T>, b: &Vec2<T>) -> Self {
        Self {
            e12: a.x.clone() * b.y.clone() - a.y.clone() * b.x.clone(),
        }
    }
}

impl Bivector2<f64> {
    /// The unsigned area of the spanned parallelogram.
    pub fn magnitude(&self) -> f64 {
        self.e12.abs()
    }
}

impl<T: Scalar> Add for Bivector2<T> {
    type Output = Bivector2<T>;
    fn add(self, rhs: Bivector2<T>) -> Bivector2<T> {
        Bivector2::new(self.e12 + rhs.e12)
    }
}

impl<T: Scalar> Sub for Bivector2<T> {
    type Output = Bivector2<T>;
    fn sub(self, rhs: Bivector2<T>) -> Bivector2<T> {
        Bivector2::new(self.e12 - rhs.e12)
    }
}

impl<T: Scalar> Neg for Bivector2<T> {
    type Output = Bivector2<T>;
    fn neg(self) -> Bivector2<T> {
        Bivector2::new(-self.e12)
    }
}

impl<T: Scalar> Mul<T> for Bivector2<T> {
    type Output = Bivector2<T>;
    fn mul(self, rhs: T) -> Bivector2<T> {
        Bivector2::new(self.e12 * rhs)
    }
}
