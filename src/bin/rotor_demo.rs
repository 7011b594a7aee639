use std::f64::consts::FRAC_PI_2;

use ga_toolkit::{apply_matrix2, rotation_matrix2, Rotor2, Rounded, Vec2};

const EPS: f64 = 1e-12;

fn close(a: Vec2<f64>, b: Vec2<f64>) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

// Rotates e1 by a quarter turn three ways and checks they agree.
fn main() {
    let v = Vec2::new(1.0, 0.0);
    let rotor = Rotor2::from_angle(FRAC_PI_2);

    let sandwich = rotor.rotate(v);
    let fast = rotor.rotate_fast(v);
    let matrix = apply_matrix2(&rotation_matrix2(FRAC_PI_2), v);

    println!("=== quarter turn of {} ===", v);
    println!("sandwich R v ~R : {}", Rounded::new(&sandwich, 6));
    println!("double angle    : {}", Rounded::new(&fast, 6));
    println!("rotation matrix : {}", Rounded::new(&matrix, 6));
    println!();

    let half = Rotor2::from_angle(FRAC_PI_2 / 2.0);
    let composed = half.rotate(half.rotate(v));
    println!("two eighth turns: {}", Rounded::new(&composed, 6));
    println!(
        "all paths agree : {}",
        if close(sandwich, fast) && close(sandwich, matrix) && close(sandwich, composed) {
            "✓"
        } else {
            "✗"
        }
    );
}
