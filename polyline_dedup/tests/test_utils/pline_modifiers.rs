use polyline_dedup::{core::math::Vector2, polyline::Polyline};

/// Two point polyline from `(x1, y1)` to `(x2, y2)`.
pub fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Polyline<f64> {
    Polyline::from_points([Vector2::new(x1, y1), Vector2::new(x2, y2)])
}

/// Moves every point of `input` by `(dx, dy)`.
pub fn translated(input: &Polyline<f64>, dx: f64, dy: f64) -> Polyline<f64> {
    Polyline::from_points(
        input
            .iter_points()
            .map(|p| Vector2::new(p.x + dx, p.y + dy)),
    )
}

/// Small deterministic xorshift generator so generated batches are reproducible.
#[derive(Debug, Clone)]
pub struct SegmentGen {
    state: u64,
}

impl SegmentGen {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Value in `0..n`.
    pub fn next_index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Random segment with coordinates on a grid of `grid_size` cells of `spacing`.
    pub fn grid_segment(&mut self, grid_size: usize, spacing: f64) -> Polyline<f64> {
        let mut coord = || self.next_index(grid_size) as f64 * spacing;
        let (x1, y1, x2, y2) = (coord(), coord(), coord(), coord());
        seg(x1, y1, x2, y2)
    }

    /// Batch of `count` segments where roughly `dup_ratio` of the entries copy (possibly reversed
    /// and jittered by at most `jitter` per coordinate) an earlier entry.
    pub fn batch_with_duplicates(
        &mut self,
        count: usize,
        dup_ratio: f64,
        jitter: f64,
    ) -> Vec<Polyline<f64>> {
        let mut result: Vec<Polyline<f64>> = Vec::with_capacity(count);
        for _ in 0..count {
            if !result.is_empty() && self.next_f64() < dup_ratio {
                let source = result[self.next_index(result.len())].clone();
                let source = if self.next_f64() < 0.5 {
                    source.reversed()
                } else {
                    source
                };
                let dx = (self.next_f64() * 2.0 - 1.0) * jitter;
                let dy = (self.next_f64() * 2.0 - 1.0) * jitter;
                result.push(translated(&source, dx, dy));
            } else {
                result.push(self.grid_segment(50, 1.0));
            }
        }

        result
    }
}
