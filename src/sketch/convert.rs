use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle, Text};
use svg::{node::Text as TextNode, Document};

use super::{Sketch, SketchElement, SketchPath, SketchText};
use crate::point::Point2;

/// Converts a [Sketch] into an [svg::Document].
///
/// Poster space is the y-up unit square; screen space is y-down pixels. All
/// coordinates pass through [SketchConverter::to_screen] on the way out.
pub(crate) struct SketchConverter {
    width: f64,
    height: f64,
}

/// Font scaling: one point of font size per 1/720 of the canvas height,
/// so an 18pt title comes out at 25px on the default 1000px tall canvas.
const PIXELS_PER_POINT: f64 = 1.0 / 720.0;

impl SketchConverter {
    pub fn convert(sketch: &Sketch) -> Document {
        let converter = SketchConverter {
            width: sketch.width as f64,
            height: sketch.height as f64,
        };

        let mut document = Document::new()
            .set("width", sketch.width)
            .set("height", sketch.height)
            .set(
                "viewBox",
                format!("0 0 {} {}", sketch.width, sketch.height),
            );

        if let Some(background) = sketch.background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background.to_string()),
            );
        }

        for element in &sketch.elements {
            document = converter.convert_element(document, element);
        }

        document
    }

    fn convert_element(&self, document: Document, element: &SketchElement) -> Document {
        match element {
            SketchElement::Path(path) => document.add(self.convert_path(path)),
            SketchElement::Text(text) => document.add(self.convert_text(text)),
        }
    }

    fn convert_path(
        &self,
        SketchPath {
            points,
            fill,
            opacity,
        }: &SketchPath,
    ) -> Path {
        let mut data = Data::new();
        for (index, point) in points.iter().enumerate() {
            let (x, y) = self.to_screen(*point);
            data = if index == 0 {
                data.move_to((x, y))
            } else {
                data.line_to((x, y))
            };
        }
        data = data.close();

        Path::new()
            .set("d", data)
            .set("fill", fill.to_string())
            .set("fill-opacity", *opacity)
            .set("stroke", "none")
    }

    fn convert_text(
        &self,
        SketchText {
            text,
            position,
            font_size,
            bold,
        }: &SketchText,
    ) -> Text {
        let (x, y) = self.to_screen(*position);

        let mut result = Text::new()
            .set("x", x)
            .set("y", y)
            .set("font-size", font_size * self.height * PIXELS_PER_POINT)
            .set("font-family", "sans-serif")
            .set("fill", "black");

        if *bold {
            result = result.set("font-weight", "bold");
        }

        result.add(TextNode::new(text))
    }

    fn to_screen(&self, point: Point2<f64>) -> (f64, f64) {
        (point.x * self.width, (1.0 - point.y) * self.height)
    }
}
