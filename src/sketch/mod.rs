//! Conversion of posters into SVG documents.
//!
//! This is the presentation boundary: the generative core hands over a
//! [Poster](crate::Poster) value and everything here is plain drawing. The
//! scene model is deliberately small - filled closed paths and text are all a
//! poster needs.

use crate::color::Color;
use crate::point::Point2;
use crate::poster::Poster;
use convert::SketchConverter;

mod convert;

/// A closed, filled outline.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchPath {
    points: Vec<Point2<f64>>,
    fill: Color,
    opacity: f64,
}

impl SketchPath {
    /// Sets the fill opacity, default `1.0`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A piece of text anchored at a point in poster space.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchText {
    text: String,
    position: Point2<f64>,
    font_size: f64,
    bold: bool,
}

impl SketchText {
    /// Sets the font size in points, default `12.0`.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Renders the text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Any element a sketch can contain.
#[derive(Clone, Debug, PartialEq)]
pub enum SketchElement {
    /// A filled closed outline
    Path(SketchPath),
    /// An anchored piece of text
    Text(SketchText),
}

impl SketchElement {
    /// Creates a closed path through the given poster space points, filled
    /// with `fill`.
    pub fn path(points: impl Into<Vec<Point2<f64>>>, fill: Color) -> SketchPath {
        SketchPath {
            points: points.into(),
            fill,
            opacity: 1.0,
        }
    }

    /// Creates a text element anchored at `position`.
    pub fn text<S: Into<String>>(text: S, position: Point2<f64>) -> SketchText {
        SketchText {
            text: text.into(),
            position,
            font_size: 12.0,
            bold: false,
        }
    }
}

impl From<SketchPath> for SketchElement {
    fn from(path: SketchPath) -> Self {
        SketchElement::Path(path)
    }
}

impl From<SketchText> for SketchElement {
    fn from(text: SketchText) -> Self {
        SketchElement::Text(text)
    }
}

/// A drawable scene over the unit square.
///
/// Elements are drawn in insertion order. Poster space is y-up; the
/// conversion to screen space flips the y axis and scales to the configured
/// pixel dimensions.
#[derive(Clone, Debug)]
pub struct Sketch {
    pub(crate) elements: Vec<SketchElement>,
    pub(crate) background: Option<Color>,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Sketch {
    /// Creates an empty sketch with the default 700×1000 pixel canvas.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            background: None,
            width: 700,
            height: 1000,
        }
    }

    /// Builds the sketch for a poster: background, all layers back to front,
    /// then the annotations on top.
    pub fn from_poster(poster: &Poster) -> Self {
        let mut sketch = Sketch::new();
        sketch.set_background(poster.background);

        for layer in &poster.layers {
            sketch.add(
                SketchElement::path(layer.blob.points(), layer.color).opacity(layer.opacity),
            );
        }

        for annotation in &poster.annotations {
            let mut text = SketchElement::text(annotation.text.clone(), annotation.position)
                .font_size(annotation.font_size);
            if annotation.bold {
                text = text.bold();
            }
            sketch.add(text);
        }

        sketch
    }

    /// Like [Self::from_poster], additionally printing the seed in the lower
    /// left corner.
    pub fn from_poster_with_seed_caption(poster: &Poster) -> Self {
        let mut sketch = Self::from_poster(poster);
        sketch.add(
            SketchElement::text(
                format!("seed: {:.6}", poster.seed),
                Point2::new(0.05, 0.03),
            )
            .font_size(9.0),
        );
        sketch
    }

    /// Sets the canvas size in pixels.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the background color.
    pub fn set_background(&mut self, background: Color) -> &mut Self {
        self.background = Some(background);
        self
    }

    /// Appends an element; later elements are drawn on top.
    pub fn add<T: Into<SketchElement>>(&mut self, item: T) -> &mut Self {
        self.elements.push(item.into());
        self
    }

    /// Converts the sketch and writes it as an SVG file.
    pub fn save_to_svg<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let document = SketchConverter::convert(self);
        svg::save(path, &document)
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}
