//! Basic example demonstrating kmeans2d-rs usage
//!
//! Run with: cargo run --example basic --release

use kmeans2d_rs::{points_from_array, KMeans, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== kmeans2d-rs example ===\n");

    let n_points = 300;
    let config = KMeansConfig::default().with_seed(42);

    println!(
        "Generating {} points in the unit square, k={}, {} iterations...\n",
        n_points, config.k, config.iterations
    );

    let data = Array2::random((n_points, 2), Uniform::new(0.0, 1.0));
    let points = points_from_array(&data.view()).expect("two columns");

    let mut kmeans = KMeans::with_config(config);
    kmeans.train(&points).expect("Training failed");

    let engine = kmeans.engine().expect("trained");

    // One series per cluster, the way a scatter plot would consume it
    for (i, view) in engine.views().enumerate() {
        let center = view.center();
        println!(
            "Cluster {}: center ({:.4}, {:.4}), {} points ({:.1}%)",
            i,
            center.x(),
            center.y(),
            view.len(),
            (view.len() as f64 / n_points as f64) * 100.0
        );
        for point in view.points().take(5) {
            println!("    ({:.3}, {:.3})", point.x(), point.y());
        }
        if view.len() > 5 {
            println!("    ... {} more", view.len() - 5);
        }
    }

    println!("\nInertia: {:.6}", engine.inertia());
    println!("\n=== Done! ===");
}
