//! Tests for SVG styling primitives.

use super::*;

mod color_tests {
    use super::*;

    #[test]
    fn hex_format() {
        let color = Color::hex("#58a6ff");
        assert_eq!(color.to_attr(), Some("#58a6ff"));
    }

    #[test]
    fn inherit_writes_nothing() {
        assert_eq!(Color::Inherit.to_attr(), None);
    }
}

mod font_weight_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", FontWeight::Normal), "400");
        assert_eq!(format!("{}", FontWeight::SemiBold), "600");
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }
}
