//! Primitive SVG elements: rectangles, text and groups.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::{Color, FontWeight};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Writes ` name="value"` when the color is set.
fn write_color_attr(output: &mut String, name: &str, color: &Color) {
    if let Some(value) = color.to_attr() {
        let _ = write!(output, r#" {name}="{value}""#);
    }
}

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill: Color::Inherit,
            stroke: Color::Inherit,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut output = format!(r#"<rect x="{}" y="{}""#, self.x, self.y);
        if self.corner_radius > 0.0 {
            let _ = write!(
                output,
                r#" rx="{r}" ry="{r}""#,
                r = self.corner_radius
            );
        }
        let _ = write!(
            output,
            r#" width="{}" height="{}""#,
            self.width, self.height
        );
        write_color_attr(&mut output, "fill", &self.fill);
        write_color_attr(&mut output, "stroke", &self.stroke);
        output.push_str("/>");
        output
    }
}

/// A single line of text.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub fill: Color,
    pub content: String,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            fill: Color::Inherit,
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<text x="{}" y="{}" font-size="{}""#,
            self.x, self.y, self.font_size
        );
        if self.font_weight != FontWeight::Normal {
            let _ = write!(output, r#" font-weight="{}""#, self.font_weight);
        }
        write_color_attr(&mut output, "fill", &self.fill);
        let _ = write!(output, ">{}</text>", xml_escape(&self.content));
        output
    }
}

/// A `<g>` element whose font and fill are inherited by its children.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub font_family: Option<String>,
    pub fill: Option<Color>,
    children: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.children.push(element.render());
        self
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let mut output = String::from("<g");
        if let Some(family) = &self.font_family {
            let _ = write!(output, r#" font-family="{}""#, xml_escape(family));
        }
        if let Some(fill) = &self.fill {
            write_color_attr(&mut output, "fill", fill);
        }
        output.push('>');

        for child in &self.children {
            for line in child.lines() {
                let _ = write!(output, "\n  {line}");
            }
        }

        output.push_str("\n</g>");
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
