//! Tests for SVG document builder.

use super::*;
use crate::output::svg::element::Rect;

#[test]
fn builder_creates_svg() {
    let svg = SvgBuilder::new(200.0, 100.0).with_label("Custom SVG").build();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("width=\"200\" height=\"100\" viewBox=\"0 0 200 100\""));
    assert!(svg.contains("aria-label=\"Custom SVG\""));
    assert!(svg.ends_with("</svg>"));
    // No static IDs
    assert!(!svg.contains("id=\""));
}

#[test]
fn builder_without_label_omits_aria() {
    let svg = SvgBuilder::new(10.0, 10.0).build();
    assert!(!svg.contains("aria-label"));
}

#[test]
fn builder_adds_xml_declaration() {
    let svg = SvgBuilder::new(10.0, 10.0).with_xml_declaration().build();
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"));
}

#[test]
fn builder_adds_elements_indented() {
    let svg = SvgBuilder::new(100.0, 100.0)
        .push_element(&Rect::new(0.0, 0.0, 100.0, 100.0))
        .build();

    assert!(svg.contains("\n  <rect x=\"0\" y=\"0\" width=\"100\" height=\"100\"/>\n"));
}
