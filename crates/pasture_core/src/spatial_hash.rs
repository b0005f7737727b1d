//! Uniform-grid spatial hashing for proximity queries.
//!
//! Backs the per-tick food and body-segment scans so that collision and
//! steering checks stay near-linear instead of `O(creatures × food)`. The
//! index is an internal accelerator only: queries return a superset of the
//! points within the radius and callers apply the exact distance test, so
//! outcomes are identical to a full scan.

use pasture_data::Vec2;

/// Grid-based spatial hash using offset-indexed point lists.
///
/// Uses the "offset array" pattern (like compressed sparse rows):
/// `cell_offsets[i]..cell_offsets[i + 1]` spans all point indices in cell
/// `i`, kept in their original insertion order. Rebuilt from scratch every
/// tick, so there is no incremental update path.
///
/// Points outside the world bounds are binned into the nearest edge cell.
/// Creatures can run off the arena and burst food can scatter past a wall;
/// both must still participate in queries.
#[derive(Clone, Debug)]
pub struct SpatialHash {
    pub cell_size: f64,
    pub cols: usize,
    pub rows: usize,
    cell_offsets: Vec<usize>,
    point_indices: Vec<usize>,
}

impl SpatialHash {
    pub fn new(cell_size: f64, width: f64, height: f64) -> Self {
        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;
        Self {
            cell_size,
            cols,
            rows,
            cell_offsets: vec![0; cols * rows + 1],
            point_indices: Vec::new(),
        }
    }

    /// Computes the cell index for a world coordinate.
    ///
    /// Out-of-bounds coordinates clamp to the edge cells; non-finite
    /// coordinates return `None` and the point is left out of the index.
    #[inline]
    fn cell_idx(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = ((x / self.cell_size).floor() as i64).clamp(0, self.cols as i64 - 1) as usize;
        let cy = ((y / self.cell_size).floor() as i64).clamp(0, self.rows as i64 - 1) as usize;
        Some(cy * self.cols + cx)
    }

    /// Rebuilds the index over `points` with a counting sort into the offset
    /// array.
    pub fn rebuild(&mut self, points: &[Vec2]) {
        let cell_count = self.cols * self.rows;

        let mut counts = vec![0usize; cell_count];
        for p in points {
            if let Some(idx) = self.cell_idx(p.x, p.y) {
                counts[idx] += 1;
            }
        }

        self.cell_offsets.resize(cell_count + 1, 0);
        let mut total = 0;
        for (i, &count) in counts.iter().enumerate() {
            self.cell_offsets[i] = total;
            total += count;
        }
        self.cell_offsets[cell_count] = total;

        self.point_indices.resize(total, 0);
        let mut cursors = self.cell_offsets[..cell_count].to_vec();
        for (point_idx, p) in points.iter().enumerate() {
            if let Some(cell_idx) = self.cell_idx(p.x, p.y) {
                self.point_indices[cursors[cell_idx]] = point_idx;
                cursors[cell_idx] += 1;
            }
        }
    }

    /// Collects into `result` the indices of all points whose cell overlaps
    /// the axis-aligned box around `(x, y)` with half-extent `radius`.
    ///
    /// A superset of the points within `radius`; callers filter by exact
    /// distance.
    #[inline]
    pub fn query_into(&self, x: f64, y: f64, radius: f64, result: &mut Vec<usize>) {
        result.clear();
        let min_cx = (((x - radius) / self.cell_size).floor() as i64).clamp(0, self.cols as i64 - 1);
        let max_cx = (((x + radius) / self.cell_size).floor() as i64).clamp(0, self.cols as i64 - 1);
        let min_cy = (((y - radius) / self.cell_size).floor() as i64).clamp(0, self.rows as i64 - 1);
        let max_cy = (((y + radius) / self.cell_size).floor() as i64).clamp(0, self.rows as i64 - 1);

        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let cell_idx = (cy as usize * self.cols) + cx as usize;
                let start = self.cell_offsets[cell_idx];
                let end = self.cell_offsets[cell_idx + 1];
                result.extend_from_slice(&self.point_indices[start..end]);
            }
        }
    }

    /// Number of indexed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.point_indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_finds_nearby() {
        let mut sh = SpatialHash::new(5.0, 20.0, 20.0);
        sh.rebuild(&[
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(17.0, 17.0),
        ]);

        let mut result = Vec::new();
        sh.query_into(1.5, 1.5, 2.0, &mut result);
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_rebuild_clears_previous_points() {
        let mut sh = SpatialHash::new(5.0, 20.0, 20.0);
        sh.rebuild(&[Vec2::new(1.0, 1.0)]);
        sh.rebuild(&[]);
        let mut result = Vec::new();
        sh.query_into(1.0, 1.0, 10.0, &mut result);
        assert!(result.is_empty());
        assert!(sh.is_empty());
    }

    #[test]
    fn test_out_of_bounds_points_still_queryable() {
        let mut sh = SpatialHash::new(5.0, 20.0, 20.0);
        sh.rebuild(&[Vec2::new(-40.0, 3.0), Vec2::new(3.0, 3.0)]);

        // Both the off-world point and a query centered off-world land in
        // the edge cells.
        let mut result = Vec::new();
        sh.query_into(-35.0, 3.0, 5.0, &mut result);
        assert!(result.contains(&0));
    }

    #[test]
    fn test_non_finite_points_skipped() {
        let mut sh = SpatialHash::new(5.0, 20.0, 20.0);
        sh.rebuild(&[Vec2::new(f64::NAN, 1.0), Vec2::new(1.0, 1.0)]);
        assert_eq!(sh.len(), 1);
    }

    #[test]
    fn test_query_covers_full_radius_box() {
        let mut sh = SpatialHash::new(5.0, 100.0, 100.0);
        let points: Vec<Vec2> = (0..20)
            .map(|i| Vec2::new(i as f64 * 5.0, 50.0))
            .collect();
        sh.rebuild(&points);

        let mut result = Vec::new();
        sh.query_into(50.0, 50.0, 12.0, &mut result);
        // Every point within 12 units must be in the candidate set.
        for (i, p) in points.iter().enumerate() {
            if p.distance(Vec2::new(50.0, 50.0)) < 12.0 {
                assert!(result.contains(&i), "missing point {i}");
            }
        }
    }
}
