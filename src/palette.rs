use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::color::{Color, WARM_CATALOG};

/// The number of colors a poster's palette is drawn with.
pub const PALETTE_SIZE: usize = 5;

/// An ordered selection of distinct catalog colors.
///
/// Palettes never exceed the catalog size, so they always fit inline.
pub type Palette = SmallVec<[Color; PALETTE_SIZE]>;

/// Samples `k` distinct colors from the warm catalog.
///
/// `k` is clamped to the catalog size before sampling; requesting more colors
/// than the catalog holds returns the whole catalog (in sample order) rather
/// than failing or duplicating entries. The returned order is fully
/// determined by the state of `rng`.
pub fn choose_palette<R: Rng + ?Sized>(rng: &mut R, k: usize) -> Palette {
    let k = k.min(WARM_CATALOG.len());
    WARM_CATALOG.choose_multiple(rng, k).copied().collect()
}
