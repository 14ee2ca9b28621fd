/// Rendered size of a label in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Measures the rendered extent of label text.
///
/// Box sizes are derived from this measurement, so implementations must be
/// deterministic for a given text and font size.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Backend-independent glyph-width estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    pub line_height_ratio: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        TextExtent {
            width: estimate_label_text_width_px(text, font_size_px),
            height: font_size_px * self.line_height_ratio,
        }
    }
}

pub(crate) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' | ';' | '!' | 'i' | 'l' | 'j' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'A'..='Z' | 'm' | 'w' => 0.72,
            _ => 0.58,
        }
    });
    // Empty and one-glyph labels still get a box at least one em wide.
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::{EstimatedTextMeasurer, TextMeasurer};

    #[test]
    fn longer_labels_measure_wider() {
        let measurer = EstimatedTextMeasurer::default();
        let short = measurer.measure("7", 14.0);
        let long = measurer.measure("7777777", 14.0);
        assert!(long.width > short.width);
        assert_eq!(short.height, long.height);
    }

    #[test]
    fn empty_label_is_one_em_wide() {
        let extent = EstimatedTextMeasurer::default().measure("", 10.0);
        assert_eq!(extent.width, 10.0);
    }
}
