// src/multivector.rs
use std::ops::{Add, Neg, Sub};

use crate::{bivector::Bivector2, scalar::Scalar, vector::Vec2};

/// A full element of Cl(2,0): scalar + vector + bivector grades.
///
/// Unlike [`geometric_prod_vec`](crate::ga::geometric_prod_vec), which
/// collapses the product of two vectors into one scalar, this type keeps
/// every grade separate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multivector2<T = f64> {
    pub scalar: T,
    pub vector: Vec2<T>,
    pub bivector: Bivector2<T>,
}

impl<T: Scalar> Multivector2<T> {
    pub fn zero() -> Self {
        Self {
            scalar: T::zero(),
            vector: Vec2::zero(),
            bivector: Bivector2::zero(),
        }
    }

    pub fn from_scalar(s: T) -> Self {
        Self {
            scalar: s,
            vector: Vec2::zero(),
            bivector: Bivector2::zero(),
        }
    }

    pub fn from_vector(v: Vec2<T>) -> Self {
        Self {
            scalar: T::zero(),
            vector: v,
            bivector: Bivector2::zero(),
        }
    }

    pub fn from_bivector(b: Bivector2<T>) -> Self {
        Self {
            scalar: T::zero(),
            vector: Vec2::zero(),
            bivector: b,
        }
    }

    /// Blade coefficients in table order [1, e1, e2, e12].
    pub fn to_blades(&self) -> [T; 4] {
        [
            self.scalar.clone(),
            self.vector.x.clone(),
            self.vector.y.clone(),
            self.bivector.e12.clone(),
        ]
    }

    pub fn from_blades(blades: [T; 4]) -> Self {
        let [s, x, y, e12] = blades;
        Self {
            scalar: s,
            vector: Vec2::new(x, y),
            bivector: Bivector2::new(e12),
        }
    }

    /// The full geometric product, keeping all grades.
    pub fn gp(&self, other: &Self) -> Self {
        Self::from_blades(crate::ga::geometric_product(
            &self.to_blades(),
            &other.to_blades(),
        ))
    }

    pub fn reverse(&self) -> Self {
        // grade 2 changes sign
        Self {
            scalar: self.scalar.clone(),
            vector: self.vector.clone(),
            bivector: Bivector2::new(-self.bivector.e12.clone()),
        }
    }
}

impl<T: Scalar> Add for Multivector2<T> {
    type Output = Multivector2<T>;
    fn add(self, rhs: Multivector2<T>) -> Multivector2<T> {
        Multivector2 {
            scalar: self.scalar + rhs.scalar,
            vector: self.vector + rhs.vector,
            bivector: self.bivector + rhs.bivector,
        }
    }
}

impl<T: Scalar> Sub for Multivector2<T> {
    type Output = Multivector2<T>;
    fn sub(self, rhs: Multivector2<T>) -> Multivector2<T> {
        Multivector2 {
            scalar: self.scalar - rhs.scalar,
            vector: self.vector - rhs.vector,
            bivector: self.bivector - rhs.bivector,
        }
    }
}

impl<T: Scalar> Neg for Multivector2<T> {
    type Output = Multivector2<T>;
    fn neg(self) -> Multivector2<T> {
        Multivector2 {
            scalar: -self.scalar,
            vector: -self.vector,
            bivector: -self.bivector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{dot, wedge};

    #[test]
    fn product_of_vectors_separates_the_grades() {
        let u = Vec2::new(4.0, 2.0);
        let v = Vec2::new(3.0, 3.0);

        let m = Multivector2::from_vector(u).gp(&Multivector2::from_vector(v));

        assert_eq!(m.scalar, dot(&u, &v));
        assert_eq!(m.bivector.e12, wedge(&u, &v));
        assert_eq!(m.vector, Vec2::zero());
    }

    #[test]
    fn scalars_commute_with_everything() {
        let two = Multivector2::from_scalar(2.0);
        let v = Multivector2::from_vector(Vec2::new(4.0, 2.0));
        assert_eq!(two.gp(&v), v.gp(&two));
        assert_eq!(two.gp(&v).vector, Vec2::new(8.0, 4.0));
    }

    #[test]
    fn pseudoscalar_squares_to_minus_one() {
        let i = Multivector2::from_bivector(Bivector2::new(1.0));
        let m = i.gp(&i);
        assert_eq!(m, Multivector2::from_scalar(-1.0));
    }

    #[test]
    fn reverse_flips_only_the_bivector() {
        let m = Multivector2 {
            scalar: 1.0,
            vector: Vec2::new(2.0, 3.0),
            bivector: Bivector2::new(4.0),
        };
        let r = m.reverse();
        assert_eq!(r.scalar, 1.0);
        assert_eq!(r.vector, m.vector);
        assert_eq!(r.bivector.e12, -4.0);

        // a vector times its own reverse is its squared norm
        let v = Multivector2::from_vector(Vec2::new(3.0, 4.0));
        assert_eq!(v.gp(&v.reverse()), Multivector2::from_scalar(25.0));
    }

    #[test]
    fn addition_is_grade_wise() {
        let a = Multivector2::from_scalar(1.0) + Multivector2::from_vector(Vec2::new(2.0, 0.0));
        assert_eq!(a.scalar, 1.0);
        assert_eq!(a.vector, Vec2::new(2.0, 0.0));
        assert_eq!((a.clone() - a).scalar, 0.0);
    }
}
