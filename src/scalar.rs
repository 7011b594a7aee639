// src/scalar.rs

use std::fmt::{Debug, Display};
use std::ops::{Div, Neg, Sub};

use num_traits::{One, Zero};

/// The coefficient field every 2-D GA value is generic over.
///
/// `f64` is the numeric instance; [`Expr`](crate::expr::Expr) is the exact
/// symbolic one. Addition and multiplication come in through the
/// `Zero`/`One` supertraits.
///
/// Zero tests go through [`Zero::is_zero`] and are exact, never
/// epsilon-based: the projection and rejection guards trip only on a
/// divisor that is literally zero.
pub trait Scalar:
    Clone
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Debug
    + Display
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Neg<Output = T>
        + Sub<Output = T>
        + Div<Output = T>
        + Debug
        + Display
{
}
