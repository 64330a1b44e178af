use crate::algorithm::KMeansEngine;
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::point::{points_from_array, Point};
use log::info;
use ndarray::ArrayView2;
use std::time::Instant;

/// k-means clustering of points in the plane with a scikit-learn style API.
///
/// Wraps a [`KMeansEngine`] seeded from the configured seed, so training the
/// same data with the same configuration always gives the same clusters.
///
/// # Example
///
/// ```
/// use kmeans2d_rs::{KMeans, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 11.0),
/// ];
///
/// let mut kmeans = KMeans::new(2);
/// kmeans.train(&points).unwrap();
///
/// let labels = kmeans.predict(&[Point::new(0.5, 0.5)]).unwrap();
/// assert_eq!(labels.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Trained engine (None if not yet fitted)
    engine: Option<KMeansEngine>,

    /// Iterations performed by the last training run
    n_iterations: usize,
}

impl KMeans {
    /// Create a new instance with `k` clusters and default configuration.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new instance with custom configuration.
    ///
    /// The configuration is validated against the data when training.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            config,
            engine: None,
            n_iterations: 0,
        }
    }

    /// Train the model on the given points.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidConfiguration`] if `points` is empty, `k` is 0,
    /// `k` exceeds the number of points, or a point is not finite. A failed call
    /// leaves any previously trained state untouched.
    pub fn train(&mut self, points: &[Point]) -> Result<(), KMeansError> {
        let start = Instant::now();
        let mut engine =
            KMeansEngine::with_seed(points.to_vec(), self.config.k, self.config.seed)?;

        info!(
            "Training k-means: {} points, {} clusters, {} iterations{}",
            points.len(),
            self.config.k,
            self.config.iterations,
            if self.config.early_stop {
                " (early stop)"
            } else {
                ""
            }
        );

        let n_iterations = if self.config.early_stop {
            engine.run_until_converged(self.config.iterations)
        } else {
            engine.run(self.config.iterations);
            self.config.iterations
        };

        info!(
            "Finished after {} iterations in {:.4}s, inertia = {:.6}",
            n_iterations,
            start.elapsed().as_secs_f64(),
            engine.inertia()
        );

        self.engine = Some(engine);
        self.n_iterations = n_iterations;
        Ok(())
    }

    /// Train on an array of shape (n_points, 2).
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidDimensions`] if the array is not two columns wide,
    /// otherwise the same errors as [`KMeans::train`].
    pub fn train_array(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        let points = points_from_array(data)?;
        self.train(&points)
    }

    /// Fit the model to the points. Equivalent to `train()`.
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn fit(&mut self, points: &[Point]) -> Result<&mut Self, KMeansError> {
        self.train(points)?;
        Ok(self)
    }

    /// Nearest trained centroid for each point.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::NotFitted`] if the model has not been trained.
    pub fn predict(&self, points: &[Point]) -> Result<Vec<usize>, KMeansError> {
        let engine = self.engine.as_ref().ok_or(KMeansError::NotFitted)?;
        Ok(points.iter().map(|p| engine.nearest_cluster(p)).collect())
    }

    /// Fit the model and return the final cluster of every training point.
    pub fn fit_predict(&mut self, points: &[Point]) -> Result<Vec<usize>, KMeansError> {
        self.train(points)?;
        let engine = self.engine.as_ref().ok_or(KMeansError::NotFitted)?;

        match engine.labels() {
            Some(labels) => Ok(labels),
            // zero iterations: nothing was assigned during training
            None => self.predict(points),
        }
    }

    /// The trained engine, with final memberships and centroids
    pub fn engine(&self) -> Option<&KMeansEngine> {
        self.engine.as_ref()
    }

    /// Trained centroids, or `None` if the model has not been fitted.
    pub fn centroids(&self) -> Option<Vec<Point>> {
        self.engine.as_ref().map(KMeansEngine::centroids)
    }

    /// Iterations performed by the last training run.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn random_points(n: usize) -> Vec<Point> {
        let data = Array2::random((n, 2), Uniform::new(0.0, 1.0));
        points_from_array(&data.view()).unwrap()
    }

    #[test]
    fn test_kmeans_new() {
        let kmeans = KMeans::new(4);
        assert_eq!(kmeans.k(), 4);
        assert_eq!(kmeans.config().iterations, 20);
        assert!(kmeans.centroids().is_none());
        assert!(kmeans.engine().is_none());
    }

    #[test]
    fn test_kmeans_train() {
        let points = random_points(300);
        let mut kmeans = KMeans::new(3);

        kmeans.train(&points).unwrap();

        let centroids = kmeans.centroids().unwrap();
        assert_eq!(centroids.len(), 3);
        assert_eq!(kmeans.n_iterations(), 20);
    }

    #[test]
    fn test_kmeans_train_array() {
        let data = Array2::random((100, 2), Uniform::new(0.0, 1.0));
        let mut kmeans = KMeans::new(3);

        assert!(kmeans.train_array(&data.view()).is_ok());

        let wide = Array2::random((100, 3), Uniform::new(0.0, 1.0));
        let result = kmeans.train_array(&wide.view());
        assert!(matches!(result, Err(KMeansError::InvalidDimensions(_))));
    }

    #[test]
    fn test_kmeans_fit_predict() {
        let points = random_points(200);
        let mut kmeans = KMeans::new(4);

        let labels = kmeans.fit_predict(&points).unwrap();
        assert_eq!(labels.len(), 200);
        assert!(labels.iter().all(|&l| l < 4));
    }

    #[test]
    fn test_fit_predict_zero_iterations() {
        let points = random_points(50);
        let mut kmeans = KMeans::with_config(KMeansConfig::new(2).with_iterations(0));

        let labels = kmeans.fit_predict(&points).unwrap();
        assert_eq!(labels.len(), 50);
        assert_eq!(kmeans.n_iterations(), 0);
    }

    #[test]
    fn test_kmeans_predict_before_fit() {
        let kmeans = KMeans::new(2);
        let result = kmeans.predict(&[Point::new(0.0, 0.0)]);
        assert!(matches!(result, Err(KMeansError::NotFitted)));
    }

    #[test]
    fn test_failed_train_keeps_previous_model() {
        let points = random_points(20);
        let mut kmeans = KMeans::new(3);
        kmeans.train(&points).unwrap();

        let result = kmeans.train(&points[..2]);
        assert!(matches!(result, Err(KMeansError::InvalidConfiguration(_))));
        assert!(kmeans.centroids().is_some());
    }

    #[test]
    fn test_kmeans_k_zero() {
        let mut kmeans = KMeans::new(0);
        let result = kmeans.train(&random_points(10));
        assert!(matches!(result, Err(KMeansError::InvalidConfiguration(_))));
    }
}
