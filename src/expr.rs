// src/expr.rs

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A small symbolic expression tree:
/// - constants and variables
/// - addition, subtraction, multiplication, division, negation
///
/// The operator impls fold constants eagerly, so arithmetic over
/// constant-only expressions behaves like plain `f64` arithmetic while
/// anything containing a variable stays an exact tree. `Expr` satisfies
/// [`Scalar`](crate::scalar::Scalar), so every toolkit operation runs
/// symbolically unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Const(f64),
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
}

fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl Expr {
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    pub fn c(v: f64) -> Expr {
        Expr::Const(v)
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Const(v)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        use Expr::*;
        match self {
            Const(c) => write!(f, "{}", fmt_number(*c)),
            Var(name) => write!(f, "{}", name),
            Add(a, b) => write!(f, "({} + {})", a, b),
            Sub(a, b) => write!(f, "({} - {})", a, b),
            Mul(a, b) => write!(f, "({} * {})", a, b),
            Div(a, b) => write!(f, "({} / {})", a, b),
            Neg(a) => write!(f, "-{}", a),
        }
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        use Expr::*;
        match (&self, &rhs) {
            (Const(a), Const(b)) => Const(a + b),
            (Const(z), _) if *z == 0.0 => rhs,
            (_, Const(z)) if *z == 0.0 => self,
            _ => Add(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        use Expr::*;
        match (&self, &rhs) {
            (Const(a), Const(b)) => Const(a - b),
            (_, Const(z)) if *z == 0.0 => self,
            _ => Sub(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        use Expr::*;
        match (&self, &rhs) {
            (Const(a), Const(b)) => Const(a * b),
            (Const(z), _) | (_, Const(z)) if *z == 0.0 => Const(0.0),
            (Const(o), _) if *o == 1.0 => rhs,
            (_, Const(o)) if *o == 1.0 => self,
            _ => Mul(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Div for Expr {
    type Output = Expr;
    fn div(self, rhs: Expr) -> Expr {
        use Expr::*;
        match (&self, &rhs) {
            // a literal zero divisor stays an explicit tree
            (Const(a), Const(b)) if *b != 0.0 => Const(a / b),
            (_, Const(o)) if *o == 1.0 => self,
            _ => Div(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        use Expr::*;
        match self {
            Const(c) => Const(-c),
            Neg(inner) => *inner,
            other => Neg(Box::new(other)),
        }
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Const(0.0)
    }

    /// Exact, structural: only a literal zero constant counts. A
    /// symbolic expression that merely evaluates to zero does not.
    fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(c) if *c == 0.0)
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Const(1.0)
    }
}

impl Expr {
    /// Recursively simplifies the tree: constant folding, zero/one
    /// absorption, `x + x` to `2 * x`, double-negation removal, `x - x`
    /// to `0`, `x / x` to `1`, and a constants-lead canonical order for
    /// products.
    ///
    /// This is the lightweight normalizer; the e-graph in
    /// [`simplify`](crate::simplify) handles forms this one cannot, like
    /// cancelling a shared factor through a division.
    pub fn simplify(&self) -> Expr {
        use Expr::*;
        match self {
            Const(c) => Const(*c),
            Var(v) => Var(v.clone()),

            Add(a, b) => {
                let a_s = a.simplify();
                let b_s = b.simplify();
                match (&a_s, &b_s) {
                    (Const(z), x) if *z == 0.0 => x.clone(),
                    (x, Const(z)) if *z == 0.0 => x.clone(),
                    (Const(av), Const(bv)) => Const(av + bv),
                    _ if a_s == b_s => (Const(2.0) * a_s).simplify(),
                    _ => Add(Box::new(a_s), Box::new(b_s)),
                }
            }

            Sub(a, b) => {
                let a_s = a.simplify();
                let b_s = b.simplify();
                match (&a_s, &b_s) {
                    (x, Const(z)) if *z == 0.0 => x.clone(),
                    (Const(z), x) if *z == 0.0 => (-x.clone()).simplify(),
                    (Const(av), Const(bv)) => Const(av - bv),
                    _ if a_s == b_s => Const(0.0),
                    _ => Sub(Box::new(a_s), Box::new(b_s)),
                }
            }

            Mul(a, b) => {
                let a_s = a.simplify();
                let b_s = b.simplify();
                match (&a_s, &b_s) {
                    (Const(z), _) | (_, Const(z)) if *z == 0.0 => Const(0.0),
                    (Const(o), x) if *o == 1.0 => x.clone(),
                    (x, Const(o)) if *o == 1.0 => x.clone(),
                    (Const(av), Const(bv)) => Const(av * bv),
                    (Neg(x), Neg(y)) => {
                        (x.as_ref().clone() * y.as_ref().clone()).simplify()
                    }
                    (Const(c), Neg(x)) => {
                        (Const(-c) * x.as_ref().clone()).simplify()
                    }
                    (Neg(x), Const(c)) => {
                        (Const(-c) * x.as_ref().clone()).simplify()
                    }
                    // constants lead: x * 2 becomes 2 * x
                    (x, Const(c)) => Mul(Box::new(Const(*c)), Box::new(x.clone())),
                    (Neg(x), y) => -(x.as_ref().clone() * y.clone()),
                    (x, Neg(y)) => -(x.clone() * y.as_ref().clone()),
                    _ => Mul(Box::new(a_s), Box::new(b_s)),
                }
            }

            Div(a, b) => {
                let a_s = a.simplify();
                let b_s = b.simplify();
                match (&a_s, &b_s) {
                    (x, Const(o)) if *o == 1.0 => x.clone(),
                    (Const(av), Const(bv)) if *bv != 0.0 => Const(av / bv),
                    (Const(z), x) if *z == 0.0 && !x.is_zero() => Const(0.0),
                    _ if a_s == b_s && !a_s.is_zero() => Const(1.0),
                    _ => Div(Box::new(a_s), Box::new(b_s)),
                }
            }

            Neg(a) => {
                let a_s = a.simplify();
                match a_s {
                    Const(c) => Const(-c),
                    Neg(inner) => *inner,
                    Mul(a_inner, b_inner) => match a_inner.as_ref() {
                        // fold the sign into a leading constant
                        Const(c) => Mul(Box::new(Const(-*c)), b_inner),
                        _ => Neg(Box::new(Mul(a_inner, b_inner))),
                    },
                    other => Neg(Box::new(other)),
                }
            }
        }
    }

    /// Substitutes variables from `env` and simplifies the result. A
    /// closed expression collapses to a single constant; unbound
    /// variables are left in place.
    pub fn subs(&self, env: &HashMap<String, f64>) -> Expr {
        use Expr::*;
        match self {
            Const(c) => Const(*c),
            Var(name) => match env.get(name) {
                Some(v) => Const(*v),
                None => Var(name.clone()),
            },
            Add(a, b) => (a.subs(env) + b.subs(env)).simplify(),
            Sub(a, b) => (a.subs(env) - b.subs(env)).simplify(),
            Mul(a, b) => (a.subs(env) * b.subs(env)).simplify(),
            Div(a, b) => (a.subs(env) / b.subs(env)).simplify(),
            Neg(a) => (-a.subs(env)).simplify(),
        }
    }
}
