use std::{error::Error, io::Write};

use tabwriter::TabWriter;

use ga_toolkit::ga::{geometric_product, BLADE_NAMES};

fn blade(i: usize) -> [f64; 4] {
    let mut b = [0.0; 4];
    b[i] = 1.0;
    b
}

// A product of two unit blades is a signed unit blade; name it.
fn decode(p: &[f64; 4]) -> String {
    for (k, &c) in p.iter().enumerate() {
        if c == 1.0 {
            return BLADE_NAMES[k].to_string();
        }
        if c == -1.0 {
            return format!("-{}", BLADE_NAMES[k]);
        }
    }
    "0".to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Cl(2,0) blade product table ===");

    let mut tw = TabWriter::new(std::io::stdout())
        .padding(2)
        .minwidth(6);

    writeln!(tw, "*\t{}", BLADE_NAMES.join("\t"))?;
    for i in 0..4 {
        let cells: Vec<String> = (0..4)
            .map(|j| decode(&geometric_product(&blade(i), &blade(j))))
            .collect();
        writeln!(tw, "{}\t{}", BLADE_NAMES[i], cells.join("\t"))?;
    }
    tw.flush()?;

    let mut associative = true;
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                let left = geometric_product(&geometric_product(&blade(i), &blade(j)), &blade(k));
                let right = geometric_product(&blade(i), &geometric_product(&blade(j), &blade(k)));
                if left != right {
                    associative = false;
                }
            }
        }
    }

    println!();
    println!(
        "associativity over all 64 blade triples: {}",
        if associative { "✓" } else { "✗" }
    );
    Ok(())
}
