use ga_toolkit::{dot, project, reject, wedge, Expr, GaResult, Vec2};

// Walks the u = 4e1 + 2e2, v = 3e1 + 3e2 fixture with symbolic scalars:
// projection, rejection, then the grade-separated geometric product.
fn main() -> GaResult<()> {
    let e1 = Vec2::<Expr>::e1();
    let e2 = Vec2::<Expr>::e2();

    let u = e1.scale(Expr::c(4.0)) + e2.scale(Expr::c(2.0));
    let v = e1.scale(Expr::c(3.0)) + e2.scale(Expr::c(3.0));

    let proj = project(&u, &v)?;
    println!("proj = {}", proj);
    println!(
        "proj (simplified) = {}",
        Vec2::new(proj.x.simplify(), proj.y.simplify())
    );
    println!();

    let rej = reject(&u, &v)?;
    println!("rej = {}", rej);
    println!(
        "rej (simplified) = {}",
        Vec2::new(rej.x.simplify(), rej.y.simplify())
    );
    println!();

    let d = dot(&u, &v);
    let w = wedge(&u, &v);
    println!("u v = {} + {}*(e1 wedge e2)", d, w);

    Ok(())
}
