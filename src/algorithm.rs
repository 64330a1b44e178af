use crate::cluster::{Cluster, ClusterView};
use crate::distance::{compute_centroid_shift, find_nearest_clusters, nearest_cluster};
use crate::error::KMeansError;
use crate::point::{points_to_array, Point};
use log::{debug, trace};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// k-means over a fixed set of points in the plane.
///
/// The engine owns the input points and exactly `k` clusters. Each iteration
/// is an assignment pass (every point joins the cluster with the nearest
/// center) followed by an update pass (every non-empty cluster moves to the
/// mean of its members).
#[derive(Debug, Clone)]
pub struct KMeansEngine {
    points: Vec<Point>,
    clusters: Vec<Cluster>,
}

impl KMeansEngine {
    /// Create an engine whose `k` initial centers are drawn uniformly at random
    /// from `points`, with replacement.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidConfiguration`] if `points` is empty, `k` is 0,
    /// `k` exceeds the number of points, or a point has a non-finite coordinate.
    pub fn new<R: Rng>(points: Vec<Point>, k: usize, rng: &mut R) -> Result<Self, KMeansError> {
        validate(&points, k)?;

        let centers = (0..k)
            .map(|_| points[rng.gen_range(0..points.len())])
            .collect();

        Ok(Self::seeded(points, centers))
    }

    /// Same as [`KMeansEngine::new`] with a `ChaCha8Rng` seeded from `seed`.
    pub fn with_seed(points: Vec<Point>, k: usize, seed: u64) -> Result<Self, KMeansError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(points, k, &mut rng)
    }

    /// Create an engine with explicit initial centers; `k` is `centers.len()`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`KMeansEngine::new`], and the centers must be finite.
    pub fn with_centers(points: Vec<Point>, centers: Vec<Point>) -> Result<Self, KMeansError> {
        validate(&points, centers.len())?;
        if let Some(center) = centers.iter().find(|c| !c.is_finite()) {
            return Err(KMeansError::InvalidConfiguration(format!(
                "Initial center {:?} has a non-finite coordinate",
                center
            )));
        }

        Ok(Self::seeded(points, centers))
    }

    fn seeded(points: Vec<Point>, centers: Vec<Point>) -> Self {
        debug!("Seeded {} clusters over {} points", centers.len(), points.len());

        Self {
            points,
            clusters: centers.into_iter().map(Cluster::new).collect(),
        }
    }

    /// Reassign every point to its nearest cluster.
    ///
    /// Memberships are rebuilt from scratch, so afterwards the clusters
    /// partition the point set. Ties go to the earliest cluster.
    pub fn assign_points(&mut self) {
        let labels = find_nearest_clusters(&self.points, &self.clusters);

        for cluster in &mut self.clusters {
            cluster.clear_members();
        }
        for (index, label) in labels.into_iter().enumerate() {
            self.clusters[label].add_member(index);
        }

        for (i, cluster) in self.clusters.iter().enumerate() {
            if cluster.is_empty() {
                trace!("Cluster {} has no members; its center is retained", i);
            }
        }
    }

    /// Move every cluster to the mean of its members.
    pub fn update_centers(&mut self) {
        let points = self.points.as_slice();
        self.clusters
            .par_iter_mut()
            .for_each(|cluster| cluster.update_center(points));
    }

    /// Run exactly `iterations` assign/update iterations.
    pub fn run(&mut self, iterations: usize) {
        for iteration in 0..iterations {
            self.step(iteration, iterations);
        }
    }

    /// Run at most `max_iterations` iterations, stopping after the first one whose
    /// assignment pass left every membership unchanged.
    ///
    /// Returns the number of iterations performed. The final state is the same as
    /// [`KMeansEngine::run`] would leave for any larger iteration count.
    pub fn run_until_converged(&mut self, max_iterations: usize) -> usize {
        for iteration in 0..max_iterations {
            let previous = self.memberships();
            self.step(iteration, max_iterations);

            if self.memberships() == previous {
                debug!("Converged after {} iterations (membership unchanged)", iteration + 1);
                return iteration + 1;
            }
        }

        max_iterations
    }

    fn step(&mut self, iteration: usize, total: usize) {
        let previous_centroids = self.centroids();

        self.assign_points();
        self.update_centers();

        let shift = compute_centroid_shift(&previous_centroids, &self.centroids());
        debug!("Iteration {}/{}: shift = {:.6}", iteration + 1, total, shift);
    }

    fn memberships(&self) -> Vec<Vec<usize>> {
        self.clusters
            .iter()
            .map(|cluster| cluster.members().to_vec())
            .collect()
    }

    /// Number of clusters
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// The input points, in their original order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Read-only views of the clusters, in cluster order
    pub fn views(&self) -> impl Iterator<Item = ClusterView<'_>> + '_ {
        self.clusters
            .iter()
            .map(move |cluster| ClusterView::new(cluster, &self.points))
    }

    /// Current cluster centers, in cluster order
    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(Cluster::center).collect()
    }

    /// Current cluster centers as an array of shape (k, 2)
    pub fn centroids_array(&self) -> Array2<f64> {
        points_to_array(&self.centroids())
    }

    /// Cluster index of every point, or `None` before the first assignment pass
    pub fn labels(&self) -> Option<Vec<usize>> {
        let mut labels = vec![None; self.points.len()];
        for (label, cluster) in self.clusters.iter().enumerate() {
            for &index in cluster.members() {
                labels[index] = Some(label);
            }
        }
        labels.into_iter().collect()
    }

    /// Index of the cluster whose current center is nearest to `point`
    pub fn nearest_cluster(&self, point: &Point) -> usize {
        nearest_cluster(point, &self.clusters)
    }

    /// Sum of squared distances from each member to its cluster's center
    pub fn inertia(&self) -> f64 {
        self.clusters
            .iter()
            .map(|cluster| {
                let center = cluster.center();
                cluster
                    .member_points(&self.points)
                    .map(|p| p.squared_distance(&center))
                    .sum::<f64>()
            })
            .sum()
    }
}

fn validate(points: &[Point], k: usize) -> Result<(), KMeansError> {
    if points.is_empty() {
        return Err(KMeansError::InvalidConfiguration(
            "at least one point is required".to_string(),
        ));
    }

    if k == 0 {
        return Err(KMeansError::InvalidConfiguration(
            "k must be greater than 0".to_string(),
        ));
    }

    if k > points.len() {
        return Err(KMeansError::InvalidConfiguration(format!(
            "Number of points ({}) is less than k ({})",
            points.len(),
            k
        )));
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(KMeansError::InvalidConfiguration(format!(
            "Point {} has a non-finite coordinate",
            index
        )));
    }

    Ok(())
}
