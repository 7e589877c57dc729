use serde::{Deserialize, Serialize};

use crate::pointer::TRAIL_LENGTH;
use crate::preview::PreviewPlacement;
use crate::trail::{TrailLayout, TrailStyle, TRAIL_STRIDE};

pub const DEFAULT_CURSOR_IMAGE: &str = "images/cursor.png";
pub const TRAIL_LENGTH_MAX: usize = 64;
pub const TRAIL_STRIDE_MAX: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub trail_style: TrailStyle,
    pub preview_placement: PreviewPlacement,
    pub trail_length: usize,
    pub trail_stride: usize,
    pub cursor_image: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            trail_style: TrailStyle::default(),
            preview_placement: PreviewPlacement::default(),
            trail_length: TRAIL_LENGTH,
            trail_stride: TRAIL_STRIDE,
            cursor_image: Some(DEFAULT_CURSOR_IMAGE.to_string()),
        }
    }
}

impl PageSettings {
    /// Applies one `key=value` pair. Unknown keys are ignored; invalid values
    /// leave the current setting in place and report why.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), String> {
        let key = key.trim().to_ascii_lowercase().replace('_', "-");
        let value = value.trim();
        match key.as_str() {
            "trail" => {
                self.trail_style = TrailStyle::parse(value)
                    .ok_or_else(|| format!("unknown trail style {value:?}"))?;
            }
            "preview" => {
                self.preview_placement = PreviewPlacement::parse(value)
                    .ok_or_else(|| format!("unknown preview placement {value:?}"))?;
            }
            "trail-length" => {
                self.trail_length = parse_bounded(value, TRAIL_LENGTH_MAX)
                    .ok_or_else(|| format!("trail length out of range {value:?}"))?;
            }
            "trail-stride" => {
                self.trail_stride = parse_bounded(value, TRAIL_STRIDE_MAX)
                    .ok_or_else(|| format!("trail stride out of range {value:?}"))?;
            }
            "cursor" => {
                self.cursor_image = match value {
                    "" | "none" => None,
                    path => Some(path.to_string()),
                };
            }
            _ => {}
        }
        Ok(())
    }

    /// Pulls numeric fields back into range, e.g. after deserializing.
    pub fn normalize(&mut self) {
        self.trail_length = self.trail_length.clamp(1, TRAIL_LENGTH_MAX);
        self.trail_stride = self.trail_stride.clamp(1, TRAIL_STRIDE_MAX);
        if self
            .cursor_image
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            self.cursor_image = None;
        }
    }

    pub fn trail_layout(&self) -> TrailLayout {
        TrailLayout::new(self.trail_length, self.trail_stride, self.trail_style)
    }
}

fn parse_bounded(value: &str, max: usize) -> Option<usize> {
    let parsed = value.parse::<usize>().ok()?;
    (1..=max).contains(&parsed).then_some(parsed)
}
