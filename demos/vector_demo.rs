use faer::Mat;
use rand::Rng;
use smath::{Axis, Vector, cross, dot, lagrange_interpolate, norm, normalize, unit_vector};

fn main() {
    // plain Vec<f64> vectors
    let mut rng = rand::thread_rng();
    let a: Vec<f64> = (0..3).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let b: Vec<f64> = (0..3).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let c = cross(&a, &b).unwrap();
    println!("a × b = {:?}, a · (a × b) = {:e}", c, dot(&a, &c).unwrap());

    let unit = normalize(&a);
    println!("|a| = {}, |a / |a|| = {}", norm(&a), norm(&unit));

    // the same operations over a faer column
    let a_col = Mat::from_fn(3, 1, |i, _| a[i]);
    let z: Mat<f64> = unit_vector(Axis::Z);
    let planar = cross(&a_col, &z).unwrap();
    println!(
        "a × ẑ = ({}, {}, {})",
        Vector::get(&planar, 0),
        Vector::get(&planar, 1),
        Vector::get(&planar, 2)
    );

    // interpolate y = x³ samples at an off-node point
    let samples: Vec<(f64, f64)> = (0..7).map(|i| (i as f64, (i as f64).powi(3))).collect();
    let x = 3.25;
    println!("p({x}) = {} (exact {})", lagrange_interpolate(&samples, x), x * x * x);
}
