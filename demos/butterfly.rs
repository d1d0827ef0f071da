extern crate parametric_curves;

use parametric_curves::butterfly;

fn main() {

    let width = 800.0;
    let height = 600.0;

    let number_of_steps = 360;
    let step = std::f64::consts::TAU / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let point = butterfly(step * i as f64, width, height);
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
