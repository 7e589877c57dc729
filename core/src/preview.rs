use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::pointer::Point;

/// Rendered edge length of the square preview panel.
pub const PREVIEW_SIZE: f64 = 300.0;
/// Distance between the pointer and the panel corner.
pub const PREVIEW_GAP: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPlacement {
    #[default]
    Follow,
    Random,
}

impl PreviewPlacement {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "follow" => Some(PreviewPlacement::Follow),
            "random" => Some(PreviewPlacement::Random),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Region the preview's top-left corner may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl SafeRect {
    /// Viewport minus the header and footer bands, shrunk so a panel of
    /// `panel_size` placed anywhere inside stays on screen.
    pub fn between(viewport: Viewport, header_bottom: f64, footer_top: f64, panel_size: f64) -> Self {
        let top = header_bottom.clamp(0.0, viewport.height);
        let footer_top = footer_top.clamp(top, viewport.height);
        let right = (viewport.width - panel_size).max(0.0);
        let bottom = (footer_top - panel_size).max(top);
        Self {
            left: 0.0,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Panel corner offset from the pointer, flipped to the other side on an
/// axis where it would overflow, then kept on screen.
pub fn follow_position(pointer: Point, viewport: Viewport) -> Point {
    Point::new(
        follow_axis(pointer.x, viewport.width),
        follow_axis(pointer.y, viewport.height),
    )
}

fn follow_axis(pointer: f64, extent: f64) -> f64 {
    let mut pos = pointer + PREVIEW_GAP;
    if pos + PREVIEW_SIZE > extent {
        pos = pointer - PREVIEW_SIZE - PREVIEW_GAP;
    }
    pos.clamp(0.0, (extent - PREVIEW_SIZE).max(0.0))
}

fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn rand_unit(seed: u64, salt: u64) -> f64 {
    let mixed = splitmix64(seed ^ salt);
    let top = mixed >> 11;
    top as f64 / ((1u64 << 53) as f64)
}

fn rand_range(seed: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}

pub fn random_position(seed: u64, salt: u64, rect: &SafeRect) -> Point {
    let salt = salt << 1;
    Point::new(
        rand_range(seed, salt, rect.left, rect.right),
        rand_range(seed, salt + 1, rect.top, rect.bottom),
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivePreview {
    pub project_id: String,
    pub image: String,
    pub position: Point,
}

/// Preview panel state for a list of non-overlapping project items.
#[derive(Clone, Debug)]
pub struct HoverPreview {
    placement: PreviewPlacement,
    catalog: ProjectCatalog,
    seed: u64,
    hovers: u64,
    active: Option<ActivePreview>,
}

impl HoverPreview {
    pub fn new(placement: PreviewPlacement, catalog: ProjectCatalog, seed: u64) -> Self {
        Self {
            placement,
            catalog,
            seed,
            hovers: 0,
            active: None,
        }
    }

    pub fn placement(&self) -> PreviewPlacement {
        self.placement
    }

    /// Shows the preview for `project_id`, replacing any previous one.
    /// Unmapped ids hide the panel instead.
    pub fn enter(
        &mut self,
        project_id: &str,
        pointer: Point,
        viewport: Viewport,
        safe: &SafeRect,
    ) -> Option<&ActivePreview> {
        self.hovers = self.hovers.wrapping_add(1);
        let Some(image) = self.catalog.image_for(project_id) else {
            self.active = None;
            return None;
        };
        let position = match self.placement {
            PreviewPlacement::Follow => follow_position(pointer, viewport),
            PreviewPlacement::Random => random_position(self.seed, self.hovers, safe),
        };
        self.active = Some(ActivePreview {
            project_id: project_id.trim().to_string(),
            image: image.to_string(),
            position,
        });
        self.active.as_ref()
    }

    /// New panel position for a move inside the hovered item, if it follows the pointer.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport) -> Option<Point> {
        if self.placement != PreviewPlacement::Follow {
            return None;
        }
        let active = self.active.as_mut()?;
        active.position = follow_position(pointer, viewport);
        Some(active.position)
    }

    /// Hides the panel. Returns whether it was visible.
    pub fn leave(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn active(&self) -> Option<&ActivePreview> {
        self.active.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }
}
