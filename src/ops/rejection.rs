//! src/ops/rejection.rs
//! The component of a 2-D vector perpendicular to a reference vector.

use crate::error::{GaError, GaResult};
use crate::ga;
use crate::scalar::Scalar;
use crate::vector::Vec2;

/// Rejects `x` about the reference vector `v`.
///
/// Builds the perpendicular component directly: the reference rotated by
/// +π/2, scaled by `wedge(x, v) / (v · v)`. The result is always
/// orthogonal to `v` and its length is the distance from `x` to the line
/// through `v`. Note the orientation: for `x = (4, 2)`, `v = (3, 3)`
/// this yields `(-1, 1)`, the mirror of the difference
/// `x - project_onto(x, v)`.
///
/// Fails with [`GaError::DivisionByZero`] when `v` is the zero vector.
pub fn reject<T: Scalar>(x: &Vec2<T>, v: &Vec2<T>) -> GaResult<Vec2<T>> {
    let vv = ga::dot(v, v);
    if vv.is_zero() {
        return Err(GaError::DivisionByZero {
            what: "reject about",
        });
    }
    let scalar = ga::wedge(x, v) / vv;
    // rotate by +pi/2 to obtain a perpendicular vector (-y, x)
    Ok(v.perp().scale(scalar))
}

/// Textbook rejection as the difference from the projection.
pub trait Vec2Rejection<T: Scalar> {
    /// `self - self.project_onto(reference)`. Fails with
    /// [`GaError::DivisionByZero`] when `reference` is the zero vector.
    fn reject_from(&self, reference: &Vec2<T>) -> GaResult<Vec2<T>>;
}

impl<T: Scalar> Vec2Rejection<T> for Vec2<T> {
    fn reject_from(&self, reference: &Vec2<T>) -> GaResult<Vec2<T>> {
        use crate::ops::projection::Vec2Projection;
        let p = self.project_onto(reference)?;
        Ok(self.clone() - p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;
    use crate::ga::dot;

    #[test]
    fn rejection_on_the_fixture() {
        let u = Vec2::new(4.0, 2.0);
        let v = Vec2::new(3.0, 3.0);
        assert_eq!(reject(&u, &v).unwrap(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn rejection_is_orthogonal_to_the_reference() {
        let v = Vec2::new(3.0, 3.0);
        for x in [
            Vec2::new(4.0, 2.0),
            Vec2::new(-1.0, 5.0),
            Vec2::new(0.25, -8.0),
        ] {
            let r = reject(&x, &v).unwrap();
            assert_eq!(dot(&r, &v), 0.0);
        }
    }

    #[test]
    fn rejection_of_a_parallel_vector_is_zero() {
        let v = Vec2::new(3.0, 3.0);
        let x = Vec2::new(1.5, 1.5);
        assert_eq!(reject(&x, &v).unwrap(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn rejecting_about_the_zero_vector_fails() {
        let x = Vec2::new(4.0, 2.0);
        let zero = Vec2::new(0.0, 0.0);
        assert_eq!(
            reject(&x, &zero),
            Err(GaError::DivisionByZero {
                what: "reject about"
            })
        );
        assert!(x.reject_from(&zero).is_err());
    }

    #[test]
    fn reject_from_completes_the_decomposition() {
        use crate::ops::projection::Vec2Projection;

        let x = Vec2::new(4.0, 2.0);
        let v = Vec2::new(3.0, 3.0);

        let r = x.reject_from(&v).unwrap();
        assert_eq!(r, Vec2::new(1.0, -1.0));
        assert_eq!(x.project_onto(&v).unwrap() + r, x);

        // the perpendicular construction is its mirror image
        assert_eq!(reject(&x, &v).unwrap(), -r);
    }

    #[test]
    fn symbolic_rejection_folds_to_constants() {
        let u = Vec2::new(Expr::c(4.0), Expr::c(2.0));
        let v = Vec2::new(Expr::c(3.0), Expr::c(3.0));
        let rej = reject(&u, &v).unwrap();
        assert_eq!(format!("{}", rej), "(-1, 1)");
    }
}
