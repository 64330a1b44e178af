use crate::point::Point;

/// A cluster: a centroid plus the indices of the points assigned to it in the
/// current iteration.
///
/// Members are indices into the point set owned by the engine, so a cluster
/// never copies point data.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    center: Point,
    members: Vec<usize>,
}

impl Cluster {
    /// Create an empty cluster centered at `center`
    pub fn new(center: Point) -> Self {
        Self {
            center,
            members: Vec::new(),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Indices of the member points, in assignment order
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append the point at `index` to the members
    pub fn add_member(&mut self, index: usize) {
        self.members.push(index);
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    /// Move the center to the mean of the member points.
    ///
    /// An empty cluster keeps its current center.
    ///
    /// # Panics
    ///
    /// Panics if a member index is out of bounds for `points`.
    pub fn update_center(&mut self, points: &[Point]) {
        if self.members.is_empty() {
            return;
        }

        // scale each term first so the sum stays finite
        let n = self.members.len() as f64;
        let (mean_x, mean_y) = self
            .member_points(points)
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x() / n, sy + p.y() / n));

        self.center = Point::new(mean_x, mean_y);
    }

    /// Member coordinates, in assignment order
    pub fn member_points<'a>(
        &'a self,
        points: &'a [Point],
    ) -> impl Iterator<Item = &'a Point> + 'a {
        self.members.iter().map(move |&i| &points[i])
    }
}

/// Read-only view of a cluster for rendering: the centroid and the ordered
/// coordinates of its members.
#[derive(Debug, Clone, Copy)]
pub struct ClusterView<'a> {
    cluster: &'a Cluster,
    points: &'a [Point],
}

impl<'a> ClusterView<'a> {
    pub(crate) fn new(cluster: &'a Cluster, points: &'a [Point]) -> Self {
        Self { cluster, points }
    }

    pub fn center(&self) -> Point {
        self.cluster.center
    }

    pub fn len(&self) -> usize {
        self.cluster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cluster.is_empty()
    }

    /// Member coordinates, in assignment order
    pub fn points(&self) -> impl Iterator<Item = &'a Point> + 'a {
        self.cluster.member_points(self.points)
    }
}
