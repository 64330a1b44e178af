use crate::error::KMeansError;
use ndarray::{Array2, ArrayView2};

/// An immutable point in the plane.
///
/// Centroid updates never mutate a point; they build a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`
    ///
    /// Finite whenever the distance itself is representable.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance to `other`
    ///
    /// Overflows to infinity for coordinates beyond about 1e154.
    #[inline]
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Convert an array of shape (n_points, 2) into points, one per row
///
/// # Errors
///
/// Returns [`KMeansError::InvalidDimensions`] if the array does not have exactly two columns.
pub fn points_from_array(data: &ArrayView2<f64>) -> Result<Vec<Point>, KMeansError> {
    if data.ncols() != 2 {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected 2 features, got {}",
            data.ncols()
        )));
    }

    Ok(data
        .outer_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect())
}

/// Stack points into an array of shape (n_points, 2)
pub fn points_to_array(points: &[Point]) -> Array2<f64> {
    let mut array = Array2::zeros((points.len(), 2));
    for (mut row, point) in array.outer_iter_mut().zip(points) {
        row[0] = point.x;
        row[1] = point.y;
    }
    array
}
