//! src/simplify.rs
//!
//! E-graph normalization of [`Expr`] trees, for the forms the recursive
//! [`Expr::simplify`] cannot reach (cancelling a shared factor through a
//! division, re-association, factoring).
//!
//! The rewrite rules treat division like the rest of the toolkit does:
//! `x / x` rewrites to `1`, which is only sound because every divisor
//! that reaches this module has already passed a zero guard.

use std::time::Duration;

use egg::{
    define_language, rewrite, Analysis, AstSize, DidMerge, EGraph, Extractor, Id, RecExpr,
    Rewrite, Runner, Symbol as EggSymbol,
};
use ordered_float::NotNan;

use crate::expr::Expr;

define_language! {
    pub enum ExprLang {
        "add" = Add([Id; 2]),
        "sub" = Sub([Id; 2]),
        "mul" = Mul([Id; 2]),
        "div" = Div([Id; 2]),
        "neg" = Neg(Id),
        Constant(NotNan<f64>),
        Var(EggSymbol),
    }
}

/// Folds constant subtrees into constant e-nodes as the graph grows.
#[derive(Default)]
pub struct ConstFold;

impl Analysis<ExprLang> for ConstFold {
    type Data = Option<f64>;

    fn make(egraph: &EGraph<ExprLang, Self>, enode: &ExprLang) -> Self::Data {
        let get = |id: &Id| egraph[*id].data;
        match enode {
            ExprLang::Constant(c) => Some(c.into_inner()),
            ExprLang::Neg(a) => get(a).map(|a| -a),
            ExprLang::Add([a, b]) => get(a).zip(get(b)).map(|(a, b)| a + b),
            ExprLang::Sub([a, b]) => get(a).zip(get(b)).map(|(a, b)| a - b),
            ExprLang::Mul([a, b]) => get(a).zip(get(b)).map(|(a, b)| a * b),
            ExprLang::Div([a, b]) => get(a)
                .zip(get(b))
                .and_then(|(a, b)| if b != 0.0 { Some(a / b) } else { None }),
            ExprLang::Var(_) => None,
        }
    }

    fn merge(&mut self, to: &mut Self::Data, from: Self::Data) -> DidMerge {
        egg::merge_option(to, from, |_a, _b| DidMerge(false, false))
    }

    fn modify(egraph: &mut EGraph<ExprLang, Self>, id: Id) {
        if let Some(c) = egraph[id].data {
            if let Ok(c) = NotNan::new(c) {
                let const_id = egraph.add(ExprLang::Constant(c));
                egraph.union(id, const_id);
            }
        }
    }
}

fn rules() -> Vec<Rewrite<ExprLang, ConstFold>> {
    vec![
        rewrite!("commute-add"; "(add ?a ?b)" => "(add ?b ?a)"),
        rewrite!("commute-mul"; "(mul ?a ?b)" => "(mul ?b ?a)"),
        rewrite!("assoc-add"; "(add (add ?a ?b) ?c)" => "(add ?a (add ?b ?c))"),
        rewrite!("assoc-mul"; "(mul (mul ?a ?b) ?c)" => "(mul ?a (mul ?b ?c))"),
        rewrite!("factor"; "(add (mul ?a ?b) (mul ?a ?c))" => "(mul ?a (add ?b ?c))"),
        rewrite!("add-0"; "(add ?a 0)" => "?a"),
        rewrite!("mul-0"; "(mul ?a 0)" => "0"),
        rewrite!("mul-1"; "(mul ?a 1)" => "?a"),
        rewrite!("sub-0"; "(sub ?a 0)" => "?a"),
        rewrite!("sub-self"; "(sub ?a ?a)" => "0"),
        rewrite!("add-self"; "(add ?a ?a)" => "(mul 2 ?a)"),
        rewrite!("neg-neg"; "(neg (neg ?x))" => "?x"),
        rewrite!("neg-sub"; "(neg (sub ?a ?b))" => "(sub ?b ?a)"),
        rewrite!("div-self"; "(div ?x ?x)" => "1"),
        rewrite!("div-1"; "(div ?x 1)" => "?x"),
        rewrite!("div-cancel"; "(div (mul ?a ?b) ?a)" => "?b"),
    ]
}

/// Search-effort limits for one e-graph run.
#[derive(Clone, Copy, Debug)]
pub struct SimplifyBudget {
    pub node_limit: usize,
    pub iter_limit: usize,
    pub time_limit: Duration,
}

impl SimplifyBudget {
    pub fn new(node_limit: usize, iter_limit: usize, time_limit: Duration) -> Self {
        Self {
            node_limit,
            iter_limit,
            time_limit,
        }
    }

    /// Small limits for hot paths.
    pub fn quick() -> Self {
        Self::new(2_000, 10, Duration::from_millis(50))
    }
}

impl Default for SimplifyBudget {
    fn default() -> Self {
        Self::new(20_000, 30, Duration::from_millis(150))
    }
}

fn add_node(expr: &Expr, out: &mut RecExpr<ExprLang>) -> Option<Id> {
    let id = match expr {
        Expr::Const(c) => out.add(ExprLang::Constant(NotNan::new(*c).ok()?)),
        Expr::Var(name) => out.add(ExprLang::Var(EggSymbol::from(name.as_str()))),
        Expr::Add(a, b) => {
            let (a, b) = (add_node(a, out)?, add_node(b, out)?);
            out.add(ExprLang::Add([a, b]))
        }
        Expr::Sub(a, b) => {
            let (a, b) = (add_node(a, out)?, add_node(b, out)?);
            out.add(ExprLang::Sub([a, b]))
        }
        Expr::Mul(a, b) => {
            let (a, b) = (add_node(a, out)?, add_node(b, out)?);
            out.add(ExprLang::Mul([a, b]))
        }
        Expr::Div(a, b) => {
            let (a, b) = (add_node(a, out)?, add_node(b, out)?);
            out.add(ExprLang::Div([a, b]))
        }
        Expr::Neg(a) => {
            let a = add_node(a, out)?;
            out.add(ExprLang::Neg(a))
        }
    };
    Some(id)
}

fn build_expr(id: Id, rec: &RecExpr<ExprLang>) -> Expr {
    match &rec[id] {
        ExprLang::Constant(c) => Expr::Const(c.into_inner()),
        ExprLang::Var(s) => Expr::Var(s.to_string()),
        ExprLang::Add([a, b]) => Expr::Add(
            Box::new(build_expr(*a, rec)),
            Box::new(build_expr(*b, rec)),
        ),
        ExprLang::Sub([a, b]) => Expr::Sub(
            Box::new(build_expr(*a, rec)),
            Box::new(build_expr(*b, rec)),
        ),
        ExprLang::Mul([a, b]) => Expr::Mul(
            Box::new(build_expr(*a, rec)),
            Box::new(build_expr(*b, rec)),
        ),
        ExprLang::Div([a, b]) => Expr::Div(
            Box::new(build_expr(*a, rec)),
            Box::new(build_expr(*b, rec)),
        ),
        ExprLang::Neg(a) => Expr::Neg(Box::new(build_expr(*a, rec))),
    }
}

/// Normalizes `expr` with the default [`SimplifyBudget`].
pub fn simplify_expr(expr: &Expr) -> Expr {
    simplify_with(expr, SimplifyBudget::default())
}

/// Runs the rewrite rules under `budget` and extracts the smallest
/// equivalent expression. A NaN constant anywhere in the tree makes the
/// input come back unchanged.
pub fn simplify_with(expr: &Expr, budget: SimplifyBudget) -> Expr {
    let mut rec = RecExpr::default();
    if add_node(expr, &mut rec).is_none() {
        return expr.clone();
    }

    let runner = Runner::default()
        .with_egraph(EGraph::new(ConstFold))
        .with_node_limit(budget.node_limit)
        .with_iter_limit(budget.iter_limit)
        .with_time_limit(budget.time_limit)
        .with_expr(&rec)
        .run(&rules());

    let extractor = Extractor::new(&runner.egraph, AstSize);
    let (_cost, best) = extractor.find_best(runner.roots[0]);
    build_expr(Id::from(best.as_ref().len() - 1), &best)
}

/// Whether the rewrite rules can prove `a` and `b` equal, by checking
/// that both land in the same e-class. A `false` answer means "not
/// proven within the budget", not a definite inequality.
pub fn equivalent(a: &Expr, b: &Expr) -> bool {
    let budget = SimplifyBudget::default();

    let mut rec_a = RecExpr::default();
    let mut rec_b = RecExpr::default();
    if add_node(a, &mut rec_a).is_none() || add_node(b, &mut rec_b).is_none() {
        return false;
    }

    let mut egraph = EGraph::new(ConstFold);
    let root_a = egraph.add_expr(&rec_a);
    let root_b = egraph.add_expr(&rec_b);

    let runner = Runner::default()
        .with_egraph(egraph)
        .with_node_limit(budget.node_limit)
        .with_iter_limit(budget.iter_limit)
        .with_time_limit(budget.time_limit)
        .run(&rules());

    runner.egraph.find(root_a) == runner.egraph.find(root_b)
}
