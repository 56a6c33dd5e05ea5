use rand::rngs::StdRng;
use rand::SeedableRng;

/// The random context from which an entire poster is derived.
///
/// A poster draws from two logically separate streams:
///  - a *scalar* stream for palette sampling and per layer parameters
///  - a *vertex* stream for the per vertex radius noise of blob outlines
///
/// Both streams are derived from a single seed value, so a poster is
/// reproducible from that seed alone. Keeping the vertex noise on its own
/// stream means changing a blob's resolution never perturbs the layer
/// parameters drawn after it.
#[derive(Debug, Clone)]
pub struct PosterRng {
    scalar: StdRng,
    vertex: StdRng,
}

impl PosterRng {
    /// Creates a fresh context from a seed.
    ///
    /// The scalar stream is keyed by the seed's bit pattern, the vertex
    /// stream by `floor(seed * 1_000_000)`. Any `f64` is a valid seed,
    /// including negative and non-finite values - the integer cast saturates
    /// deterministically.
    pub fn new(seed: f64) -> Self {
        Self {
            scalar: StdRng::seed_from_u64(seed.to_bits()),
            vertex: StdRng::seed_from_u64((seed * 1_000_000.0).floor() as u64),
        }
    }

    /// The stream driving palette sampling and layer parameter draws.
    pub fn scalar(&mut self) -> &mut StdRng {
        &mut self.scalar
    }

    /// The stream driving per vertex radius noise.
    pub fn vertex(&mut self) -> &mut StdRng {
        &mut self.vertex
    }
}

#[cfg(test)]
mod test {
    use super::PosterRng;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = PosterRng::new(0.123456);
        let mut b = PosterRng::new(0.123456);

        for _ in 0..32 {
            assert_eq!(a.scalar().gen::<f64>(), b.scalar().gen::<f64>());
            assert_eq!(a.vertex().gen::<f64>(), b.vertex().gen::<f64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PosterRng::new(0.0);
        let mut b = PosterRng::new(0.999999);

        let draws_a: Vec<f64> = (0..8).map(|_| a.scalar().gen()).collect();
        let draws_b: Vec<f64> = (0..8).map(|_| b.scalar().gen()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut plain = PosterRng::new(0.42);
        let mut interleaved = PosterRng::new(0.42);

        let expected: Vec<f64> = (0..8).map(|_| plain.scalar().gen()).collect();

        // Consuming vertex noise must not shift the scalar stream
        let mut actual = Vec::new();
        for _ in 0..8 {
            let _ = interleaved.vertex().gen::<f64>();
            actual.push(interleaved.scalar().gen::<f64>());
        }

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_degenerate_seeds_are_accepted() {
        // No panics, just deterministic output
        for seed in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.5, 0.0] {
            let mut a = PosterRng::new(seed);
            let mut b = PosterRng::new(seed);
            assert_eq!(a.scalar().gen::<u64>(), b.scalar().gen::<u64>());
            assert_eq!(a.vertex().gen::<u64>(), b.vertex().gen::<u64>());
        }
    }
}
