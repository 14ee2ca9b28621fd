use serde::{Deserialize, Serialize};

use crate::core::StructureKind;
use crate::error::{VizError, VizResult};
use crate::render::Color;

/// Canvas position where a structure's header label starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Colors used by every plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub box_fill: Color,
    pub box_border: Color,
    pub connector: Color,
    pub text: Color,
}

/// `#rrggbb` codes of [`Palette::default`], in field order.
pub const DEFAULT_PALETTE_HEX: [&str; 5] =
    ["#162129", "#223440", "#23455b", "#c7d6e0", "#edf2f5"];

impl Default for Palette {
    fn default() -> Self {
        // Built from constant, known-good codes; the fallback is unreachable.
        Self::from_hex_codes(DEFAULT_PALETTE_HEX).unwrap_or(Self {
            background: Color::rgb(0.0, 0.0, 0.0),
            box_fill: Color::rgb(0.0, 0.0, 0.0),
            box_border: Color::rgb(1.0, 1.0, 1.0),
            connector: Color::rgb(1.0, 1.0, 1.0),
            text: Color::rgb(1.0, 1.0, 1.0),
        })
    }
}

impl Palette {
    /// Builds a palette from `#rrggbb` codes ordered background, box fill,
    /// box border, connector, text.
    pub fn from_hex_codes(codes: [&str; 5]) -> VizResult<Self> {
        let [background, box_fill, box_border, connector, text] = codes;
        let parse = |code: &str| {
            Color::from_hex(code).map_err(|err| VizError::InvalidLayout(format!("palette: {err}")))
        };
        Ok(Self {
            background: parse(background)?,
            box_fill: parse(box_fill)?,
            box_border: parse(box_border)?,
            connector: parse(connector)?,
            text: parse(text)?,
        })
    }

    pub fn validate(self) -> VizResult<()> {
        self.background.validate()?;
        self.box_fill.validate()?;
        self.box_border.validate()?;
        self.connector.validate()?;
        self.text.validate()
    }
}

/// Geometry and style inputs of the layout algorithm.
///
/// Serializable so hosts can ship a tuned layout as JSON. Missing fields fall
/// back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub list_anchor: Anchor,
    pub stack_anchor: Anchor,
    pub queue_anchor: Anchor,
    /// Horizontal distance between consecutive list node centers.
    pub list_pitch_px: f64,
    /// Space left between packed stack/queue boxes.
    pub packing_gap_px: f64,
    /// Padding added on every side of a measured label.
    pub box_margin_px: f64,
    /// Vertical offset from the anchor to the first row of boxes.
    pub header_gap_px: f64,
    pub font_size_px: f64,
    pub stroke_width_px: f64,
    pub box_border_width_px: f64,
    pub arrow_head_px: f64,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list_anchor: Anchor::new(40.0, 40.0),
            queue_anchor: Anchor::new(40.0, 150.0),
            stack_anchor: Anchor::new(40.0, 260.0),
            list_pitch_px: 110.0,
            packing_gap_px: 12.0,
            box_margin_px: 8.0,
            header_gap_px: 26.0,
            font_size_px: 14.0,
            stroke_width_px: 1.5,
            box_border_width_px: 1.0,
            arrow_head_px: 7.0,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn anchor(&self, kind: StructureKind) -> Anchor {
        match kind {
            StructureKind::LinkedList => self.list_anchor,
            StructureKind::Stack => self.stack_anchor,
            StructureKind::Queue => self.queue_anchor,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, kind: StructureKind, anchor: Anchor) -> Self {
        match kind {
            StructureKind::LinkedList => self.list_anchor = anchor,
            StructureKind::Stack => self.stack_anchor = anchor,
            StructureKind::Queue => self.queue_anchor = anchor,
        }
        self
    }

    #[must_use]
    pub fn with_list_pitch(mut self, pitch_px: f64) -> Self {
        self.list_pitch_px = pitch_px;
        self
    }

    #[must_use]
    pub fn with_packing_gap(mut self, gap_px: f64) -> Self {
        self.packing_gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn with_box_margin(mut self, margin_px: f64) -> Self {
        self.box_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> VizResult<()> {
        for kind in StructureKind::ALL {
            let anchor = self.anchor(kind);
            if !anchor.x.is_finite() || !anchor.y.is_finite() {
                return Err(VizError::InvalidLayout(format!(
                    "{kind} anchor must be finite"
                )));
            }
        }
        for (name, value) in [
            ("list_pitch_px", self.list_pitch_px),
            ("font_size_px", self.font_size_px),
            ("stroke_width_px", self.stroke_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(VizError::InvalidLayout(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("packing_gap_px", self.packing_gap_px),
            ("box_margin_px", self.box_margin_px),
            ("header_gap_px", self.header_gap_px),
            ("box_border_width_px", self.box_border_width_px),
            ("arrow_head_px", self.arrow_head_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VizError::InvalidLayout(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        self.palette
            .validate()
            .map_err(|err| VizError::InvalidLayout(format!("palette: {err}")))
    }

    pub fn from_json_str(input: &str) -> VizResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| VizError::InvalidLayout(format!("failed to parse layout json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> VizResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VizError::InvalidLayout(format!("failed to serialize layout json: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PALETTE_HEX, LayoutConfig, Palette};
    use crate::error::VizError;

    #[test]
    fn default_config_is_valid() {
        LayoutConfig::default().validate().expect("default layout");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = LayoutConfig::from_json_str(r#"{ "list_pitch_px": 90.0 }"#)
            .expect("partial config");
        assert_eq!(config.list_pitch_px, 90.0);
        assert_eq!(config.font_size_px, LayoutConfig::default().font_size_px);
    }

    #[test]
    fn default_palette_comes_from_hex_codes() {
        let palette = Palette::from_hex_codes(DEFAULT_PALETTE_HEX).expect("default codes");
        assert_eq!(palette, Palette::default());
        assert!((palette.background.red - 22.0 / 255.0).abs() < 1e-12);
        assert!((palette.box_border.blue - 91.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn malformed_palette_code_is_a_layout_error() {
        let err = Palette::from_hex_codes(["#162129", "#223440", "nope", "#ffffff", "#000000"])
            .expect_err("bad code");
        assert!(matches!(err, VizError::InvalidLayout(_)));
    }

    #[test]
    fn non_positive_pitch_is_rejected() {
        assert!(LayoutConfig::default().with_list_pitch(0.0).validate().is_err());
        assert!(LayoutConfig::from_json_str(r#"{ "box_margin_px": -1.0 }"#).is_err());
    }
}
