//! # kmeans2d-rs
//!
//! k-means clustering of points in the plane by iterative centroid refinement.
//!
//! ## Features
//!
//! - **Fixed-iteration loop**: `run(n)` performs exactly `n` assign/update
//!   iterations; `run_until_converged(n)` stops once membership stabilizes
//! - **Parallel computation**: Uses rayon for the nearest-centroid lookups and
//!   the centroid updates
//! - **Reproducible seeding**: the random source is injected, or derived from a
//!   seed with `ChaCha8Rng`
//! - **ndarray compatible**: accepts and returns `(n, 2)` arrays
//!
//! ## Example
//!
//! ```rust
//! use kmeans2d_rs::{KMeansEngine, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 11.0),
//!     Point::new(11.0, 10.0),
//!     Point::new(11.0, 11.0),
//! ];
//!
//! let centers = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
//! let mut engine = KMeansEngine::with_centers(points, centers).unwrap();
//! engine.run(5);
//!
//! assert_eq!(engine.centroids(), vec![Point::new(0.5, 0.5), Point::new(10.5, 10.5)]);
//!
//! for view in engine.views() {
//!     let xs: Vec<f64> = view.points().map(|p| p.x()).collect();
//!     assert_eq!(xs.len(), 4);
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use kmeans2d_rs::{KMeans, KMeansConfig};
//! use ndarray::Array2;
//!
//! let data = Array2::from_shape_fn((300, 2), |(i, j)| ((i * 7 + j * 13) % 100) as f64 / 100.0);
//!
//! let config = KMeansConfig::new(3)
//!     .with_iterations(50)
//!     .with_seed(42)
//!     .with_early_stop(true);
//!
//! let mut kmeans = KMeans::with_config(config);
//! kmeans.train_array(&data.view()).unwrap();
//! assert!(kmeans.n_iterations() <= 50);
//! ```

mod algorithm;
mod cluster;
mod config;
mod distance;
mod error;
mod kmeans;
mod point;

pub use algorithm::KMeansEngine;
pub use cluster::{Cluster, ClusterView};
pub use config::KMeansConfig;
pub use error::KMeansError;
pub use kmeans::KMeans;
pub use point::{points_from_array, points_to_array, Point};
