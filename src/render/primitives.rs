use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` into an opaque color.
    pub fn from_hex(input: &str) -> VizResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(VizError::InvalidPrimitive(format!(
                "color `{input}` must be in #rrggbb form"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    VizError::InvalidPrimitive(format!("color `{input}` has non-hex digits"))
                })
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn validate(self) -> VizResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VizError::InvalidPrimitive(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one labelled box in pixel space.
///
/// The label is drawn centered inside the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub font_size_px: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub text_color: Color,
}

impl BoxPrimitive {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn validate(&self) -> VizResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VizError::InvalidPrimitive(
                "box position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(VizError::InvalidPrimitive(
                "box size must be finite and > 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VizError::InvalidPrimitive(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(VizError::InvalidPrimitive(
                "box border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()?;
        self.text_color.validate()
    }
}

/// Draw command for one line segment in pixel space.
///
/// `arrow_head_px > 0` marks a directed connector pointing at `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub arrow_head_px: f64,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            arrow_head_px: 0.0,
        }
    }

    #[must_use]
    pub const fn with_arrow_head(mut self, arrow_head_px: f64) -> Self {
        self.arrow_head_px = arrow_head_px;
        self
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.arrow_head_px > 0.0
    }

    pub fn validate(self) -> VizResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(VizError::InvalidPrimitive(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(VizError::InvalidPrimitive(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.arrow_head_px.is_finite() || self.arrow_head_px < 0.0 {
            return Err(VizError::InvalidPrimitive(
                "arrow head size must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one free-standing label in pixel space.
///
/// `y` is the top of the text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> VizResult<()> {
        if self.text.is_empty() {
            return Err(VizError::InvalidPrimitive(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VizError::InvalidPrimitive(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VizError::InvalidPrimitive(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Box,
    Line,
    Text,
}

/// One entry of a render plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Box(BoxPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl DrawPrimitive {
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Box(_) => PrimitiveKind::Box,
            Self::Line(_) => PrimitiveKind::Line,
            Self::Text(_) => PrimitiveKind::Text,
        }
    }

    /// Label carried by the primitive; lines carry none.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Box(rect) => Some(&rect.label),
            Self::Line(_) => None,
            Self::Text(text) => Some(&text.text),
        }
    }

    pub fn validate(&self) -> VizResult<()> {
        match self {
            Self::Box(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<BoxPrimitive> for DrawPrimitive {
    fn from(value: BoxPrimitive) -> Self {
        Self::Box(value)
    }
}

impl From<LinePrimitive> for DrawPrimitive {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<TextPrimitive> for DrawPrimitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn hex_colors_parse_into_unit_channels() {
        let color = Color::from_hex("#23455b").expect("valid hex");
        assert!((color.red - 35.0 / 255.0).abs() < 1e-12);
        assert!((color.green - 69.0 / 255.0).abs() < 1e-12);
        assert!((color.blue - 91.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.alpha, 1.0);

        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn validation_rejects_degenerate_primitives() {
        let color = Color::rgb(0.0, 0.0, 0.0);
        assert!(LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, color)
            .validate()
            .is_err());
        assert!(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, color)
            .with_arrow_head(-1.0)
            .validate()
            .is_err());
        assert!(TextPrimitive::new("", 0.0, 0.0, 12.0, color, TextHAlign::Left)
            .validate()
            .is_err());
    }
}
