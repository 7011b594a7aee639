// src/prelude.rs
//
// One-stop imports for the common surface:
//
//     use ga_toolkit::prelude::*;

pub use crate::bivector::Bivector2;
pub use crate::error::{GaError, GaResult};
pub use crate::expr::Expr;
pub use crate::ga::{dot, geometric_prod_vec, wedge};
pub use crate::multivector::Multivector2;
pub use crate::ops::projection::{project, Vec2Projection};
pub use crate::ops::rejection::{reject, Vec2Rejection};
pub use crate::rotor::Rotor2;
pub use crate::scalar::Scalar;
pub use crate::vector::{Rounded, Vec2};
