extern crate parametric_curves;

use nalgebra::Vector2;
use parametric_curves::{linear, Curve};

fn main() {

    let start = Vector2::new(0.0, 0.0);
    let end = Vector2::new(40.0, -10.0);
    let number_of_steps = 10;

    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = i as f64 / number_of_steps as f64;
        let value = linear(start, end, t);
        println!("{:.2};{:.2};{:.2}", t, value.x, value.y);
    }

    // blend between two curves at the same parameter
    println!();
    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = std::f64::consts::TAU * i as f64 / number_of_steps as f64;
        let from = Curve::Diamond.evaluate(t, 100.0, 100.0).coords;
        let to = Curve::Bicorn.evaluate(t, 100.0, 100.0).coords;
        let value = linear(from, to, 0.5);
        println!("{:.2};{:.2};{:.2}", t, value.x, value.y);
    }
}
