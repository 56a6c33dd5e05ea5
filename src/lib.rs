//! # Gouache
//!
//! Gouache generates randomized abstract posters: eight translucent,
//! irregularly wobbling blob shapes in a warm palette, layered over a paper
//! colored background.
//!
//! A poster is a pure function of a single seed value. All randomness - the
//! palette sample, every layer's placement, size, wobble, color and opacity,
//! and the per vertex outline noise - is derived from that seed, so the same
//! seed always reproduces the same poster bit for bit.
//!
//! # Example
//! ```no_run
//! use gouache::{generate_poster, Session, Sketch};
//! use rand::thread_rng;
//!
//! // A session owns the current seed; regenerating draws a new one.
//! let mut session = Session::generate(&mut thread_rng());
//! let poster = session.poster();
//!
//! // Render to SVG
//! Sketch::from_poster(&poster).save_to_svg("poster.svg")?;
//!
//! // The same seed always yields the same poster
//! assert_eq!(poster, generate_poster(session.seed()));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Feature flags
//! * `serde`: Enables serialization of poster values with
//!   [serde](https://docs.rs/serde).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod blob;
mod color;
mod palette;
mod point;
mod poster;
mod rng;
mod session;
mod sketch;

#[cfg(test)]
mod test_utilities;

pub use blob::{Blob, BLOB_RESOLUTION};
pub use color::{Color, WARM_CATALOG};
pub use palette::{choose_palette, Palette, PALETTE_SIZE};
pub use point::{Point2, PosterNum};
pub use poster::{
    generate_poster, Layer, Poster, TextAnnotation, LAYER_COUNT, SUBTITLE, TITLE,
};
pub use rng::PosterRng;
pub use session::Session;
pub use sketch::{Sketch, SketchElement, SketchPath, SketchText};
