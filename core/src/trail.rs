use serde::{Deserialize, Serialize};

use crate::pointer::{Point, PointerHistory, HISTORY_PER_MARKER, TRAIL_LENGTH};

/// History entries skipped between consecutive markers.
pub const TRAIL_STRIDE: usize = 5;
/// Opacity lost per marker in the fading variant.
pub const TRAIL_FADE_STEP: f64 = 0.08;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailStyle {
    #[default]
    Fade,
    Pack,
}

impl TrailStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fade" => Some(TrailStyle::Fade),
            "pack" => Some(TrailStyle::Pack),
            _ => None,
        }
    }
}

/// Where and how visible one marker should be this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFrame {
    pub position: Option<Point>,
    pub opacity: f64,
}

impl MarkerFrame {
    pub const HIDDEN: MarkerFrame = MarkerFrame {
        position: None,
        opacity: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }

    /// CSS transform placing the cursor tip on the sample.
    pub fn transform(&self) -> Option<String> {
        self.position
            .map(|point| format!("translate({}px, {}px)", point.x, point.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailLayout {
    pub count: usize,
    pub stride: usize,
    pub style: TrailStyle,
}

impl Default for TrailLayout {
    fn default() -> Self {
        Self {
            count: TRAIL_LENGTH,
            stride: TRAIL_STRIDE,
            style: TrailStyle::default(),
        }
    }
}

impl TrailLayout {
    pub fn new(count: usize, stride: usize, style: TrailStyle) -> Self {
        Self {
            count,
            stride: stride.max(1),
            style,
        }
    }

    /// Samples to keep so the oldest marker can be reached: the usual
    /// `count * HISTORY_PER_MARKER`, or more for long strides.
    pub fn history_capacity(&self) -> usize {
        let reach = self
            .count
            .saturating_sub(1)
            .saturating_mul(self.stride)
            .saturating_add(1);
        self.count.saturating_mul(HISTORY_PER_MARKER).max(reach)
    }

    pub fn history(&self) -> PointerHistory {
        PointerHistory::new(self.history_capacity())
    }

    /// History index sampled by marker `index`, if the history reaches it.
    pub fn history_index(&self, index: usize, history_len: usize) -> Option<usize> {
        let newest = history_len.checked_sub(1)?;
        newest.checked_sub(index.checked_mul(self.stride)?)
    }

    pub fn opacity(&self, index: usize) -> f64 {
        match self.style {
            TrailStyle::Fade => (1.0 - index as f64 * TRAIL_FADE_STEP).max(0.0),
            TrailStyle::Pack => 1.0,
        }
    }

    pub fn marker(&self, index: usize, history: &PointerHistory) -> MarkerFrame {
        let Some(history_index) = self.history_index(index, history.len()) else {
            return MarkerFrame::HIDDEN;
        };
        let Some(sample) = history.get(history_index) else {
            return MarkerFrame::HIDDEN;
        };
        MarkerFrame {
            position: Some(sample.point()),
            opacity: self.opacity(index),
        }
    }

    pub fn frames<'a>(
        &'a self,
        history: &'a PointerHistory,
    ) -> impl Iterator<Item = MarkerFrame> + 'a {
        (0..self.count).map(move |index| self.marker(index, history))
    }
}
