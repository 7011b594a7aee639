//! End-to-end checks of the projection/rejection pipeline over both
//! scalar fields.

use ga_toolkit::{
    dot, geometric_prod_vec, project, reject, wedge, Expr, GaError, Vec2, Vec2Projection,
    Vec2Rejection,
};

#[test]
fn numeric_fixture_end_to_end() {
    let u = Vec2::new(4.0, 2.0);
    let v = Vec2::new(3.0, 3.0);

    assert_eq!(dot(&u, &v), 18.0);
    assert_eq!(wedge(&u, &v), 6.0);
    assert_eq!(geometric_prod_vec(&u, &v), 24.0);

    assert_eq!(project(&u, &v), Ok(u));
    assert_eq!(reject(&u, &v), Ok(Vec2::new(-1.0, 1.0)));
}

#[test]
fn symbolic_fixture_prints_like_the_numeric_one() {
    let u = Vec2::new(Expr::c(4.0), Expr::c(2.0));
    let v = Vec2::new(Expr::c(3.0), Expr::c(3.0));

    let proj = project(&u, &v).unwrap();
    let rej = reject(&u, &v).unwrap();
    assert_eq!(proj.to_string(), "(4, 2)");
    assert_eq!(rej.to_string(), "(-1, 1)");

    let d = dot(&u, &v);
    let w = wedge(&u, &v);
    assert_eq!(
        format!("u v = {} + {}*(e1 wedge e2)", d, w),
        "u v = 18 + 6*(e1 wedge e2)"
    );
}

#[test]
fn guard_failures_surface_as_division_errors() {
    let u = Vec2::new(1.0, 0.0);
    let v = Vec2::new(0.0, 1.0);

    // orthogonal inputs trip the u . v guard
    let err = project(&u, &v).unwrap_err();
    assert_eq!(
        err,
        GaError::DivisionByZero {
            what: "project onto"
        }
    );
    assert_eq!(err.to_string(), "cannot project onto the zero vector");

    let zero = Vec2::new(0.0, 0.0);
    let err = reject(&u, &zero).unwrap_err();
    assert_eq!(err.to_string(), "cannot reject about the zero vector");
}

#[test]
fn slice_validation_reports_the_actual_length() {
    assert_eq!(Vec2::from_slice(&[4.0, 2.0]), Ok(Vec2::new(4.0, 2.0)));

    let err = Vec2::<f64>::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, GaError::InvalidShape { got: 3 });
    assert_eq!(
        err.to_string(),
        "expected a 2-component vector, got 3 components"
    );

    assert!(Vec2::<f64>::from_slice(&[]).is_err());
}

#[test]
fn rejection_complements_the_textbook_projection() {
    let x = Vec2::new(4.0, 2.0);
    let v = Vec2::new(3.0, 3.0);

    let p = x.project_onto(&v).unwrap();
    let r = x.reject_from(&v).unwrap();
    assert_eq!(p + r, x);

    // the perp-based rejection is the mirror of the difference form
    let ga_r = reject(&x, &v).unwrap();
    assert_eq!(ga_r, -r);
    assert_eq!(dot(&ga_r, &v), 0.0);
}
