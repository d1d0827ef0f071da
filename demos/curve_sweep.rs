extern crate parametric_curves;

use std::error::Error;

use parametric_curves::Curve;

// usage: cargo run --example curve_sweep -- <curve> [steps]
fn main() -> Result<(), Box<dyn Error>> {

    let mut args = std::env::args().skip(1);
    let curve: Curve = args.next().unwrap_or_else(|| "bicorn".to_string()).parse()?;
    let number_of_steps: usize = match args.next() {
        Some(steps) => steps.parse()?,
        None => 120,
    };

    let step = std::f64::consts::TAU / number_of_steps as f64;
    let t_values: Vec<f64> = (0..=number_of_steps)
        .map(|i| step * i as f64)
        .collect();

    let points = curve.batch_evaluate(&t_values, 100.0, 100.0);

    println!("t;x;y");
    for (t, point) in t_values.iter().zip(points) {
        // kappa and bow have singularities on the sweep
        if point.x.is_finite() && point.y.is_finite() {
            println!("{:.4};{:.2};{:.2}", t, point.x, point.y);
        }
    }
    Ok(())
}
