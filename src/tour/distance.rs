//! Symmetric distance lookup between city indices.

/// Pairwise city distances, immutable for the lifetime of an optimization
/// run. Stored row-major; lookups are O(1).
///
/// The matrix is owned by the caller's instance-loading layer; the
/// optimization core only ever holds a shared reference.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the Euclidean distance matrix of a 2D point set.
    ///
    /// The result is symmetric with a zero diagonal.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut weights = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                weights[i * n + j] = d;
                weights[j * n + i] = d;
            }
        }
        Self { n, weights }
    }

    /// Wraps caller-supplied weights.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for row in &rows {
            assert_eq!(row.len(), n, "distance matrix must be square");
            weights.extend_from_slice(row);
        }
        Self { n, weights }
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.n
    }

    /// Distance from city `i` to city `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }
}
