//! Higher-level GA operations

pub mod projection;
pub mod rejection;
