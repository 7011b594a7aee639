use std::{collections::HashMap, error::Error};

use ga_toolkit::simplify::{equivalent, simplify_expr};
use ga_toolkit::{project, reject, Expr, Vec2};

// Runs projection and rejection over symbolic scalars, then lets the
// e-graph prove the projection collapse and a substitution check the
// rejection numerically.
fn main() -> Result<(), Box<dyn Error>> {
    let x = Vec2::new(Expr::var("x"), Expr::var("y"));
    let v = Vec2::new(Expr::c(3.0), Expr::c(3.0));

    println!("=== symbolic projection onto v = (3, 3) ===");
    let proj = project(&x, &v)?;
    println!("raw        = {}", proj);
    println!(
        "simplified = ({}, {})",
        simplify_expr(&proj.x),
        simplify_expr(&proj.y)
    );
    println!(
        "project(x, v) == x: {}",
        if equivalent(&proj.x, &x.x) && equivalent(&proj.y, &x.y) {
            "✓"
        } else {
            "✗"
        }
    );
    println!();

    println!("=== symbolic rejection about v = (3, 3) ===");
    let rej = reject(&x, &v)?;
    println!("raw        = {}", rej);
    println!(
        "simplified = ({}, {})",
        simplify_expr(&rej.x),
        simplify_expr(&rej.y)
    );

    let at = HashMap::from([("x".to_string(), 4.0), ("y".to_string(), 2.0)]);
    println!(
        "at x = 4, y = 2: {}",
        Vec2::new(rej.x.subs(&at), rej.y.subs(&at))
    );
    Ok(())
}
