//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::xml_escape;

/// Builder for standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    label: String,
    xml_declaration: bool,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            label: String::new(),
            xml_declaration: false,
            elements: Vec::new(),
        }
    }

    /// Accessible name announced by screen readers (`aria-label`).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Prefix the document with `<?xml ...?>`, for writing `.svg` files.
    #[must_use]
    pub const fn with_xml_declaration(mut self) -> Self {
        self.xml_declaration = true;
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        if self.xml_declaration {
            output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }

        let _ = write!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img""#,
            w = self.width,
            h = self.height
        );
        if !self.label.is_empty() {
            let _ = write!(output, r#" aria-label="{}""#, xml_escape(&self.label));
        }
        output.push_str(">\n");

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
