use rand::Rng;

use crate::poster::{generate_poster, Poster};

/// Explicit session state holding the seed of the currently displayed poster.
///
/// The generative core is a pure function of its seed; this type is the one
/// place where a "current" seed lives between user interactions. The entropy
/// source is always supplied by the caller, so the core never touches an
/// implicit global generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    seed: f64,
}

impl Session {
    /// Starts a session with a freshly drawn random seed.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { seed: rng.gen() }
    }

    /// Starts a session from a known seed, e.g. to restore a poster.
    pub fn from_seed(seed: f64) -> Self {
        Self { seed }
    }

    /// The seed of the current poster.
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Replaces the current seed with a new random one.
    ///
    /// This is the "new poster" action; the caller re-invokes [Self::poster]
    /// afterwards. Returns the new seed.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.seed = rng.gen();
        self.seed
    }

    /// Generates the poster for the current seed.
    pub fn poster(&self) -> Poster {
        generate_poster(self.seed)
    }
}
