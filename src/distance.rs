use crate::cluster::Cluster;
use crate::point::Point;
use rayon::prelude::*;

/// Index of the cluster whose center is nearest to `point`
///
/// Linear scan keeping the first strict minimum, so ties go to the earliest cluster.
/// Returns 0 for an empty slice.
#[inline]
pub fn nearest_cluster(point: &Point, clusters: &[Cluster]) -> usize {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;

    for (j, cluster) in clusters.iter().enumerate() {
        let dist = point.distance(&cluster.center());
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    best_label
}

/// Nearest cluster for every point, computed in parallel
///
/// The result is in the same order as `points`.
pub fn find_nearest_clusters(points: &[Point], clusters: &[Cluster]) -> Vec<usize> {
    points
        .par_iter()
        .map(|point| nearest_cluster(point, clusters))
        .collect()
}

/// Compute centroid shift (sum of Euclidean centroid movements)
pub fn compute_centroid_shift(old_centroids: &[Point], new_centroids: &[Point]) -> f64 {
    old_centroids
        .iter()
        .zip(new_centroids)
        .map(|(old, new)| old.distance(new))
        .sum()
}
