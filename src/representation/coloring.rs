use crate::element::element;
use crate::options::ColorMode;

/// Color used for atoms whose element lookup fails.
const UNKNOWN_ELEMENT_COLOR: [f32; 3] = [1.0, 0.078, 0.576];

/// How a builder colors its primitives after resolving the color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Coloring {
    /// Per-element table colors.
    Element,
    /// The builder's single color(s).
    Single,
}

/// Resolve `mode` for `builder`, warning and falling back to per-element
/// coloring for modes that are not supported.
pub(super) fn resolve(mode: ColorMode, builder: &str) -> Coloring {
    match mode {
        ColorMode::Discrete => Coloring::Element,
        ColorMode::Single => Coloring::Single,
        ColorMode::Multiple => {
            log::warn!(
                "{builder}: color mode 'multiple' is not supported yet, \
                 using discrete coloring"
            );
            Coloring::Element
        }
        ColorMode::Unrecognized => {
            log::warn!(
                "{builder}: unrecognized color mode, using discrete coloring"
            );
            Coloring::Element
        }
    }
}

/// Element color for `atomic_number`.
pub(super) fn element_color(atomic_number: u8) -> [f32; 3] {
    element(atomic_number).map_or(UNKNOWN_ELEMENT_COLOR, |e| e.color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::{capture, warnings};

    #[test]
    fn supported_modes_do_not_warn() {
        let (coloring, records) =
            capture(|| resolve(ColorMode::Single, "test"));
        assert_eq!(coloring, Coloring::Single);
        assert!(warnings(&records).is_empty());
    }

    #[test]
    fn unsupported_modes_warn_and_fall_back() {
        for mode in [ColorMode::Multiple, ColorMode::Unrecognized] {
            let (coloring, records) = capture(|| resolve(mode, "stick"));
            assert_eq!(coloring, Coloring::Element);
            let warned = warnings(&records);
            assert_eq!(warned.len(), 1, "{mode:?}");
            assert!(warned[0].starts_with("stick:"));
        }
    }
}
