//! src/ga.rs
//!
//! Core products of Cl(2,0) over the blade order [1, e1, e2, e12].
//!
//! `dot`, `wedge` and `geometric_prod_vec` are the vector-level surface;
//! `geometric_product` is the full table-driven blade product used by
//! [`Multivector2`](crate::multivector::Multivector2).

use crate::bivector::Bivector2;
use crate::scalar::Scalar;
use crate::vector::Vec2;

/// Blade labels in table order.
pub const BLADE_NAMES: [&str; 4] = ["1", "e1", "e2", "e12"];

/// (sign, output blade index) for each pair of basis blades.
///
/// Derived from the bitmask rule e_i · e_j = sign · e_(i xor j) with the
/// sign counting basis-vector swaps; for the positive signature this
/// gives e1² = e2² = 1 and e12² = -1.
const GP_TABLE: [[(i8, usize); 4]; 4] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(1, 1), (1, 0), (1, 3), (1, 2)],
    [(1, 2), (-1, 3), (1, 0), (-1, 1)],
    [(1, 3), (-1, 2), (1, 1), (-1, 0)],
];

/// The Euclidean (inner) product of two 2-D vectors.
pub fn dot<T: Scalar>(a: &Vec2<T>, b: &Vec2<T>) -> T {
    a.dot(b)
}

/// The 2-D exterior (wedge) product of two vectors.
///
/// In 2-D the result is the pseudoscalar coefficient: the signed area of
/// the parallelogram spanned by `a` and `b`. Antisymmetric, so
/// `wedge(a, a)` is zero.
pub fn wedge<T: Scalar>(a: &Vec2<T>, b: &Vec2<T>) -> T {
    Bivector2::from_wedge(a, b).e12
}

/// Simulates the geometric product of two vectors as a single scalar:
/// `dot(a, b) + wedge(a, b)`.
///
/// This collapses the scalar and pseudoscalar grades of `a b` into one
/// number and loses the grade distinction; use
/// [`Multivector2::gp`](crate::multivector::Multivector2::gp) when the
/// grades matter.
pub fn geometric_prod_vec<T: Scalar>(a: &Vec2<T>, b: &Vec2<T>) -> T {
    dot(a, b) + wedge(a, b)
}

/// The full geometric product over blade arrays `[s, e1, e2, e12]`.
pub fn geometric_product<T: Scalar>(a: &[T; 4], b: &[T; 4]) -> [T; 4] {
    let mut out = [T::zero(), T::zero(), T::zero(), T::zero()];
    for (i, row) in GP_TABLE.iter().enumerate() {
        for (j, &(sign, k)) in row.iter().enumerate() {
            let term = a[i].clone() * b[j].clone();
            out[k] = if sign < 0 {
                out[k].clone() - term
            } else {
                out[k].clone() + term
            };
        }
    }
    out
}
