use super::Vertex;

/// The `N + 1` vertices the search moves through the space.
///
/// Vertex order is only meaningful after [`rank`](Simplex::rank), which the
/// solver calls at the start of every iteration. Observers always see a ranked
/// simplex: index 0 is the best vertex and index `N` is the worst.
#[derive(Debug, Clone)]
pub struct Simplex<I, O, const N: usize> {
    vertices: Vec<Vertex<I, O, N>>,
}

impl<I, O, const N: usize> Simplex<I, O, N> {
    /// Creates a simplex from exactly `N + 1` vertices.
    pub(super) fn new(vertices: Vec<Vertex<I, O, N>>) -> Self {
        debug_assert_eq!(vertices.len(), N + 1, "a simplex has N + 1 vertices");
        Self { vertices }
    }

    /// Returns the vertices, best first once ranked.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex<I, O, N>] {
        &self.vertices
    }

    /// Returns the best vertex (rank 0).
    #[must_use]
    pub fn best(&self) -> &Vertex<I, O, N> {
        &self.vertices[0]
    }

    /// Returns the worst vertex (rank `N`).
    #[must_use]
    pub fn worst(&self) -> &Vertex<I, O, N> {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Returns the second-worst vertex (rank `N - 1`).
    pub(super) fn second_worst(&self) -> &Vertex<I, O, N> {
        &self.vertices[self.vertices.len() - 2]
    }

    /// Sorts vertices by ascending score.
    ///
    /// The sort is stable, so tied vertices keep their previous order.
    pub(super) fn rank(&mut self) {
        self.vertices.sort_by(|a, b| a.score().total_cmp(&b.score()));
    }

    /// Coordinate-wise mean of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        let kept = &self.vertices[..self.vertices.len() - 1];
        #[allow(clippy::cast_precision_loss)]
        let count = kept.len() as f64;

        let mut centroid = [0.0; N];
        for vertex in kept {
            for (c, x) in centroid.iter_mut().zip(vertex.x) {
                *c += x / count;
            }
        }
        centroid
    }

    /// Returns `centroid + coeff * (centroid - worst)`.
    ///
    /// Reflection, expansion, and contraction differ only in `coeff`.
    pub(super) fn along_worst(&self, centroid: &[f64; N], coeff: f64) -> [f64; N] {
        let worst = &self.worst().x;
        std::array::from_fn(|i| centroid[i] + coeff * (centroid[i] - worst[i]))
    }

    /// Points of the simplex shrunk toward the best vertex by `sigma`.
    ///
    /// Includes the best vertex itself, which maps onto its own position.
    pub(super) fn shrink_targets(&self, sigma: f64) -> Vec<[f64; N]> {
        let best = self.best().x;
        self.vertices
            .iter()
            .map(|vertex| std::array::from_fn(|i| best[i] + sigma * (vertex.x[i] - best[i])))
            .collect()
    }

    /// Replaces the worst vertex.
    pub(super) fn replace_worst(&mut self, vertex: Vertex<I, O, N>) {
        let last = self.vertices.len() - 1;
        self.vertices[last] = vertex;
    }

    /// Replaces every vertex at once.
    pub(super) fn replace_all(&mut self, vertices: Vec<Vertex<I, O, N>>) {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        self.vertices = vertices;
    }

    /// Consumes the simplex and returns its first vertex.
    pub(super) fn into_best(mut self) -> Vertex<I, O, N> {
        self.vertices.swap_remove(0)
    }
}
