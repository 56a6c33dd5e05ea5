use std::f64::consts::TAU;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// The number of outline vertices used for poster blobs.
pub const BLOB_RESOLUTION: usize = 200;

/// An irregular closed polygon approximating a circle.
///
/// A blob is synthesized once from a center, base radius and a wobble
/// fraction and is immutable afterwards. Its outline consists of vertices at
/// uniformly spaced angles whose distance from the center is perturbed by per
/// vertex radius noise; the last vertex repeats the first so that the curve
/// closes exactly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Blob {
    center: Point2<f64>,
    radius: f64,
    wobble: f64,
    points: Vec<Point2<f64>>,
}

impl Blob {
    /// Synthesizes a blob outline.
    ///
    /// `point_count` angles are spaced uniformly over `[0, 2π]`, including
    /// both endpoints. For each angle one uniform value `u ∈ [0,1)` is drawn
    /// from `rng` and mapped to the radius multiplier `1 + wobble*(u - 0.5)`,
    /// so every vertex lies within `radius*(1 ± wobble/2)` of the center for
    /// `wobble ≤ 1`.
    ///
    /// The final vertex is a bit identical copy of the first. Its noise value
    /// is still drawn, which keeps the stream advancing by exactly
    /// `point_count` draws regardless of the closing rule.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2<f64>,
        radius: f64,
        point_count: usize,
        wobble: f64,
    ) -> Self {
        let mut points = Vec::with_capacity(point_count);
        let angle_step = TAU / (point_count.saturating_sub(1).max(1)) as f64;

        for index in 0..point_count {
            let u: f64 = rng.gen();

            if index + 1 == point_count && point_count > 1 {
                let first = points[0];
                points.push(first);
            } else {
                let angle = angle_step * index as f64;
                let multiplier = 1.0 + wobble * (u - 0.5);
                let offset = Point2::new(angle.cos(), angle.sin()).mul(multiplier * radius);
                points.push(center.add(offset));
            }
        }

        Self {
            center,
            radius,
            wobble,
            points,
        }
    }

    /// The center this blob was synthesized around.
    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    /// The unperturbed base radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The fractional amplitude of the per vertex radius noise.
    pub fn wobble(&self) -> f64 {
        self.wobble
    }

    /// The outline vertices, first and last coinciding.
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }
}

#[cfg(test)]
mod test {
    use super::{Blob, BLOB_RESOLUTION};
    use crate::point::Point2;
    use crate::rng::PosterRng;
    use crate::test_utilities::SEED;

    fn sample_blob(seed: f64, wobble: f64) -> Blob {
        let mut rng = PosterRng::new(seed);
        Blob::generate(
            rng.vertex(),
            Point2::new(0.5, 0.5),
            0.3,
            BLOB_RESOLUTION,
            wobble,
        )
    }

    #[test]
    fn test_curve_closes_exactly() {
        for wobble in [0.0, 0.15, 0.35, 1.0] {
            let blob = sample_blob(SEED, wobble);
            let points = blob.points();
            assert_eq!(points.len(), BLOB_RESOLUTION);
            assert_eq!(points.first(), points.last());
        }
    }

    #[test]
    fn test_wobble_bounds() {
        for wobble in [0.1, 0.35, 1.0] {
            let blob = sample_blob(0.77, wobble);
            let min = blob.radius() * (1.0 - wobble / 2.0);
            let max = blob.radius() * (1.0 + wobble / 2.0);

            for point in blob.points() {
                let distance = point.distance_2(blob.center()).sqrt();
                assert!(distance >= min - 1.0e-9, "{distance} < {min}");
                assert!(distance <= max + 1.0e-9, "{distance} > {max}");
            }
        }
    }

    #[test]
    fn test_zero_wobble_is_a_circle() {
        use approx::assert_relative_eq;

        let blob = sample_blob(0.5, 0.0);
        for point in blob.points() {
            let distance = point.distance_2(blob.center()).sqrt();
            assert_relative_eq!(distance, blob.radius(), epsilon = 1.0e-10);
        }
    }

    #[test]
    fn test_determinism() {
        let a = sample_blob(SEED, 0.2);
        let b = sample_blob(SEED, 0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_point_counts() {
        let mut rng = PosterRng::new(0.3);
        let empty = Blob::generate(rng.vertex(), Point2::new(0.5, 0.5), 0.3, 0, 0.2);
        assert!(empty.points().is_empty());

        let single = Blob::generate(rng.vertex(), Point2::new(0.5, 0.5), 0.3, 1, 0.2);
        assert_eq!(single.points().len(), 1);
    }
}
