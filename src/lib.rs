#![doc = include_str!("../README.md")]

pub mod error;
pub mod scalar;
pub mod expr;
pub mod simplify;
pub mod classical;
pub mod vector;
pub mod bivector;
pub mod multivector;
pub mod rotor;
pub mod ga;
pub mod prelude;

pub mod ops;

pub use vector::{Vec2, Rounded};
pub use bivector::Bivector2;
pub use multivector::Multivector2;
pub use rotor::Rotor2;
pub use error::{GaError, GaResult};
pub use expr::Expr;
pub use scalar::Scalar;
pub use classical::{rotation_matrix2, apply_matrix2};
pub use ga::{dot, wedge, geometric_prod_vec, geometric_product};

pub use crate::ops::projection::*;      // project + Vec2Projection
pub use crate::ops::rejection::*;       // reject + Vec2Rejection
