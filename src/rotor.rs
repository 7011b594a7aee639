// src/rotor.rs

use crate::bivector::Bivector2;
use crate::multivector::Multivector2;
use crate::vector::Vec2;

/// A rotor in the e12 plane: the even-grade element `s + b e12` with
/// `s² + b² = 1`, applied to vectors as the sandwich product `R v R̃`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotor2 {
    s: f64,
    b: f64,
}

impl Rotor2 {
    pub fn identity() -> Self {
        Self { s: 1.0, b: 0.0 }
    }

    /// The rotor for a counterclockwise rotation by `theta`:
    /// `R = exp(-θ/2 e12) = cos(θ/2) - sin(θ/2) e12`.
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = (theta / 2.0).sin_cos();
        Self { s: cos, b: -sin }
    }

    /// The exponential of a bivector: `exp(β e12) = cos β + sin β e12`.
    /// Under the sandwich product this rotates by `-2β`.
    pub fn from_bivector(bv: &Bivector2<f64>) -> Self {
        Self {
            s: bv.e12.cos(),
            b: bv.e12.sin(),
        }
    }

    pub fn scalar(&self) -> f64 {
        self.s
    }

    pub fn bivector(&self) -> Bivector2<f64> {
        Bivector2::new(self.b)
    }

    /// The counterclockwise rotation angle this rotor applies.
    pub fn angle(&self) -> f64 {
        2.0 * (-self.b).atan2(self.s)
    }

    pub fn reverse(&self) -> Self {
        Self {
            s: self.s,
            b: -self.b,
        }
    }

    pub fn to_multivector(&self) -> Multivector2<f64> {
        Multivector2 {
            scalar: self.s,
            vector: Vec2::zero(),
            bivector: Bivector2::new(self.b),
        }
    }

    /// Rotates through the full sandwich product `R v R̃`.
    pub fn rotate(&self, v: Vec2<f64>) -> Vec2<f64> {
        let rv = self.to_multivector().gp(&Multivector2::from_vector(v));
        rv.gp(&self.reverse().to_multivector()).vector
    }

    /// The sandwich product expanded by hand: one double-angle formula
    /// instead of two full blade products.
    pub fn rotate_fast(&self, v: Vec2<f64>) -> Vec2<f64> {
        let cos_t = self.s * self.s - self.b * self.b;
        let sin_t = -2.0 * self.s * self.b;
        Vec2::new(
            v.x * cos_t - v.y * sin_t,
            v.x * sin_t + v.y * cos_t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classical::{apply_matrix2, rotation_matrix2};

    const EPS: f64 = 1e-12;

    fn assert_close(a: Vec2<f64>, b: Vec2<f64>) {
        assert!((a.x - b.x).abs() < EPS, "{:?} vs {:?}", a, b);
        assert!((a.y - b.y).abs() < EPS, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn quarter_turn_sends_e1_to_e2() {
        let r = Rotor2::from_angle(std::f64::consts::FRAC_PI_2);
        assert_close(r.rotate(Vec2::e1()), Vec2::e2());
        assert_close(r.rotate_fast(Vec2::e1()), Vec2::e2());
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        let v = Vec2::new(3.0, 7.0);
        assert_close(Rotor2::identity().rotate(v), v);
        assert_eq!(Rotor2::from_angle(0.0), Rotor2::identity());
    }

    #[test]
    fn sandwich_and_fast_paths_agree() {
        let v = Vec2::new(3.0, 4.0);
        for k in 0..8 {
            let r = Rotor2::from_angle(k as f64 * 0.77);
            assert_close(r.rotate(v), r.rotate_fast(v));
        }
    }

    #[test]
    fn rotor_matches_the_rotation_matrix() {
        let theta = 1.23;
        let r = Rotor2::from_angle(theta);
        let m = rotation_matrix2(theta);
        let v = Vec2::new(-2.0, 5.0);
        assert_close(r.rotate(v), apply_matrix2(&m, v));
    }

    #[test]
    fn rotation_preserves_the_norm() {
        let r = Rotor2::from_angle(0.9);
        let v = Vec2::new(3.0, 4.0);
        assert!((r.rotate(v).norm() - 5.0).abs() < EPS);
    }

    #[test]
    fn two_eighth_turns_make_a_quarter_turn() {
        let r45 = Rotor2::from_angle(std::f64::consts::FRAC_PI_4);
        let r90 = Rotor2::from_angle(std::f64::consts::FRAC_PI_2);
        let v = Vec2::new(1.0, 0.0);
        assert_close(r45.rotate(r45.rotate(v)), r90.rotate(v));
    }

    #[test]
    fn angle_round_trips() {
        for theta in [-2.5, -0.3, 0.0, 0.4, 1.9] {
            let r = Rotor2::from_angle(theta);
            assert!((r.angle() - theta).abs() < EPS);
        }
    }

    #[test]
    fn bivector_exponential_rotates_by_minus_twice_the_area() {
        let beta = 0.6;
        let r = Rotor2::from_bivector(&Bivector2::new(beta));
        assert!((r.angle() - (-2.0 * beta)).abs() < EPS);

        // matches the half-angle constructor going the other way
        let other = Rotor2::from_angle(-2.0 * beta);
        assert!((r.scalar() - other.scalar()).abs() < EPS);
        assert!((r.bivector().e12 - other.bivector().e12).abs() < EPS);
    }
}
