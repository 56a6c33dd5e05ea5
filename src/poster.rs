use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::blob::{Blob, BLOB_RESOLUTION};
use crate::color::Color;
use crate::palette::{choose_palette, PALETTE_SIZE};
use crate::point::Point2;
use crate::rng::PosterRng;

/// The fixed number of blob layers per poster.
pub const LAYER_COUNT: usize = 8;

/// The title printed in the poster's upper left corner.
pub const TITLE: &str = "Generative Poster";

/// The subtitle printed below the title.
pub const SUBTITLE: &str = "Week 2 • Arts & Advanced Big Data";

/// One composited blob with its fill color and opacity.
///
/// Layers are painted back to front in the order they were generated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Layer {
    /// The blob outline filled by this layer.
    pub blob: Blob,
    /// The fill color, one of the poster's palette entries.
    pub color: Color,
    /// The fill opacity in `[0.25, 0.6]`.
    pub opacity: f64,
}

/// A piece of fixed text anchored in poster space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct TextAnnotation {
    /// The annotation content.
    pub text: String,
    /// The anchor position in the unit square, y pointing up.
    pub position: Point2<f64>,
    /// Font size in points.
    pub font_size: f64,
    /// Whether the text is rendered bold.
    pub bold: bool,
}

/// A complete, render ready poster.
///
/// A poster is a pure function of its seed: the background, the ordered
/// layer sequence and the two annotations are all fully determined by it.
/// Posters use the unit square `[0,1]×[0,1]` as their canvas domain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Poster {
    /// The seed this poster was generated from.
    pub seed: f64,
    /// The canvas background color.
    pub background: Color,
    /// The layers in paint order, back to front.
    pub layers: Vec<Layer>,
    /// Title and subtitle.
    pub annotations: Vec<TextAnnotation>,
}

/// Generates the poster identified by `seed`.
///
/// This is the crate's entry point. It is a pure function: a fresh
/// [PosterRng] is derived from the seed on every call, so two invocations
/// with the same seed produce bit identical posters and no state is shared
/// between calls.
///
/// Per layer, the scalar stream is consumed in a fixed order - center x,
/// center y, radius, wobble, palette index, opacity - while the vertex
/// stream contributes exactly [BLOB_RESOLUTION] noise draws for the blob
/// outline in between.
///
/// # Example
/// ```
/// use gouache::generate_poster;
///
/// let poster = generate_poster(0.123456);
/// assert_eq!(poster.layers.len(), 8);
/// assert_eq!(poster, generate_poster(0.123456));
/// ```
pub fn generate_poster(seed: f64) -> Poster {
    let mut rng = PosterRng::new(seed);

    let palette = choose_palette(rng.scalar(), PALETTE_SIZE);

    let mut layers = Vec::with_capacity(LAYER_COUNT);
    for _ in 0..LAYER_COUNT {
        let center = Point2::new(rng.scalar().gen(), rng.scalar().gen());
        let radius = rng.scalar().gen_range(0.15..=0.45);
        let wobble = rng.scalar().gen_range(0.1..=0.35);

        let blob = Blob::generate(rng.vertex(), center, radius, BLOB_RESOLUTION, wobble);

        // With replacement - layers may share a color
        let color = palette[rng.scalar().gen_range(0..palette.len())];
        let opacity = rng.scalar().gen_range(0.25..=0.6);

        layers.push(Layer {
            blob,
            color,
            opacity,
        });
    }

    Poster {
        seed,
        background: Color::BACKGROUND,
        layers,
        annotations: vec![
            TextAnnotation {
                text: TITLE.into(),
                position: Point2::new(0.05, 0.95),
                font_size: 18.0,
                bold: true,
            },
            TextAnnotation {
                text: SUBTITLE.into(),
                position: Point2::new(0.05, 0.91),
                font_size: 11.0,
                bold: false,
            },
        ],
    }
}

#[cfg(test)]
mod test {
    use super::{generate_poster, LAYER_COUNT, SUBTITLE, TITLE};
    use crate::blob::BLOB_RESOLUTION;
    use crate::color::{Color, WARM_CATALOG};
    use crate::test_utilities::{SEED, SEED2};

    #[allow(unused)]
    #[cfg(feature = "serde")]
    // Just needs to compile
    fn check_serde() {
        use serde::{Deserialize, Serialize};

        fn requires_serde<'de, T: Serialize + Deserialize<'de>>() {}

        requires_serde::<super::Poster>();
        requires_serde::<super::Layer>();
        requires_serde::<super::TextAnnotation>();
    }

    #[test]
    fn test_determinism() {
        for seed in [0.0, SEED, 0.5, SEED2, -3.25] {
            assert_eq!(generate_poster(seed), generate_poster(seed));
        }
    }

    #[test]
    fn test_layer_count() {
        assert_eq!(generate_poster(0.321).layers.len(), LAYER_COUNT);
    }

    #[test]
    fn test_parameter_ranges() {
        let poster = generate_poster(SEED);

        for layer in &poster.layers {
            let blob = &layer.blob;
            assert!((0.0..1.0).contains(&blob.center().x));
            assert!((0.0..1.0).contains(&blob.center().y));
            assert!((0.15..=0.45).contains(&blob.radius()));
            assert!((0.1..=0.35).contains(&blob.wobble()));
            assert!((0.25..=0.6).contains(&layer.opacity));
            assert!(WARM_CATALOG.contains(&layer.color));
            assert_eq!(blob.points().len(), BLOB_RESOLUTION);
        }
    }

    #[test]
    fn test_seeds_produce_distinct_posters() {
        let a = generate_poster(0.0);
        let b = generate_poster(SEED2);
        assert_ne!(a.layers, b.layers);
    }

    #[test]
    fn test_fixed_dressing() {
        let poster = generate_poster(0.77);

        assert_eq!(poster.background, Color::BACKGROUND);
        assert_eq!(poster.annotations.len(), 2);
        assert_eq!(poster.annotations[0].text, TITLE);
        assert!(poster.annotations[0].bold);
        assert_eq!(poster.annotations[1].text, SUBTITLE);
        assert!(!poster.annotations[1].bold);
    }

    #[test]
    fn test_layers_use_at_most_palette_size_colors() {
        let poster = generate_poster(SEED);

        let mut seen: Vec<Color> = Vec::new();
        for layer in &poster.layers {
            if !seen.contains(&layer.color) {
                seen.push(layer.color);
            }
        }
        assert!(seen.len() <= crate::palette::PALETTE_SIZE);
    }
}
