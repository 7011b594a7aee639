//! src/ops/projection.rs
//! Orthogonal projection of one 2-D vector onto another.

use crate::error::{GaError, GaResult};
use crate::ga;
use crate::scalar::Scalar;
use crate::vector::Vec2;

/// Projects `u` onto `v`.
///
/// Compatibility note: the guard and the divisor are both `u · v`, not
/// `v · v`. The quotient `(u · v) / (u · v)` collapses to 1 whenever it
/// is defined, so the result equals `u` itself, and the guard trips for
/// orthogonal (nonzero) inputs. Kept as-is;
/// [`Vec2Projection::project_onto`] is the textbook construction.
pub fn project<T: Scalar>(u: &Vec2<T>, v: &Vec2<T>) -> GaResult<Vec2<T>> {
    let uv = ga::dot(u, v);
    if uv.is_zero() {
        return Err(GaError::DivisionByZero {
            what: "project onto",
        });
    }
    Ok(u.scale(uv.clone()) / uv)
}

/// Textbook projection, divided by the squared norm of the target.
pub trait Vec2Projection<T: Scalar> {
    /// The component of `self` along `target`: `((self · target) /
    /// (target · target)) target`. Fails with
    /// [`GaError::DivisionByZero`] when `target` is the zero vector.
    fn project_onto(&self, target: &Vec2<T>) -> GaResult<Vec2<T>>;
}

impl<T: Scalar> Vec2Projection<T> for Vec2<T> {
    fn project_onto(&self, target: &Vec2<T>) -> GaResult<Vec2<T>> {
        let vv = ga::dot(target, target);
        if vv.is_zero() {
            return Err(GaError::DivisionByZero {
                what: "project onto",
            });
        }
        Ok(target.scale(ga::dot(self, target)) / vv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;

    #[test]
    fn project_collapses_to_the_input() {
        let u = Vec2::new(4.0, 2.0);
        let v = Vec2::new(3.0, 3.0);
        assert_eq!(project(&u, &v).unwrap(), u);
    }

    #[test]
    fn project_fails_when_the_dot_vanishes() {
        // orthogonal nonzero inputs trip the guard too
        let u = Vec2::new(1.0, 0.0);
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(
            project(&u, &v),
            Err(GaError::DivisionByZero {
                what: "project onto"
            })
        );

        let zero = Vec2::new(0.0, 0.0);
        assert!(project(&u, &zero).is_err());
    }

    #[test]
    fn project_onto_uses_the_target_norm() {
        let u = Vec2::new(4.0, 2.0);
        let v = Vec2::new(3.0, 3.0);
        assert_eq!(u.project_onto(&v).unwrap(), Vec2::new(3.0, 3.0));

        // along a basis direction only that component survives
        let e1 = Vec2::<f64>::e1();
        assert_eq!(u.project_onto(&e1).unwrap(), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn project_onto_rejects_only_the_zero_target() {
        let u = Vec2::new(1.0, 0.0);
        let v = Vec2::new(0.0, 1.0);
        // orthogonal is fine here, the projection is simply zero
        assert_eq!(u.project_onto(&v).unwrap(), Vec2::new(0.0, 0.0));

        let zero = Vec2::new(0.0, 0.0);
        assert_eq!(
            u.project_onto(&zero),
            Err(GaError::DivisionByZero {
                what: "project onto"
            })
        );
    }

    #[test]
    fn symbolic_projection_folds_to_the_input() {
        let u = Vec2::new(Expr::c(4.0), Expr::c(2.0));
        let v = Vec2::new(Expr::c(3.0), Expr::c(3.0));
        let proj = project(&u, &v).unwrap();
        assert_eq!(proj, u);
        assert_eq!(format!("{}", proj), "(4, 2)");
    }
}
