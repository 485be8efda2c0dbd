//! SVG building blocks for the streak card.
//!
//! Elements render themselves to strings; the builder assembles them into a
//! standalone document with fixed width, height and viewBox.

mod builder;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use element::{Group, Rect, SvgElement, Text};
pub use format::{format_days, xml_escape};
pub use style::{Color, FontWeight};
