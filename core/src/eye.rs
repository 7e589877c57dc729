use crate::pointer::Point;

/// Gap kept between the pupil edge and the eye outline.
pub const PUPIL_PADDING: f64 = 5.0;
/// Outline width subtracted from the measured eye radius.
pub const EYE_BORDER: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeGeometry {
    pub center: Point,
    pub eye_radius: f64,
    pub pupil_radius: f64,
}

impl EyeGeometry {
    pub fn new(center: Point, eye_radius: f64, pupil_radius: f64) -> Self {
        Self {
            center,
            eye_radius,
            pupil_radius,
        }
    }

    /// Geometry from the eye's bounding box and the pupil's rendered width.
    pub fn from_bounds(left: f64, top: f64, width: f64, height: f64, pupil_width: f64) -> Self {
        Self {
            center: Point::new(left + width / 2.0, top + height / 2.0),
            eye_radius: width / 2.0 - EYE_BORDER,
            pupil_radius: pupil_width / 2.0,
        }
    }

    pub fn max_move(&self) -> f64 {
        (self.eye_radius - self.pupil_radius - PUPIL_PADDING).max(0.0)
    }
}

/// Pupil offset from the eye center toward `pointer`, clamped to the
/// circle of radius [`EyeGeometry::max_move`].
pub fn pupil_offset(eye: &EyeGeometry, pointer: Point) -> Point {
    let delta = pointer - eye.center;
    let distance = delta.length();
    let max_move = eye.max_move();
    if distance <= max_move {
        return delta;
    }
    if distance == 0.0 {
        return Point::ZERO;
    }
    let scale = max_move / distance;
    Point::new(delta.x * scale, delta.y * scale)
}

pub fn pupil_transform(offset: Point) -> String {
    format!(
        "translate(calc(-50% + {}px), calc(-50% + {}px))",
        offset.x, offset.y
    )
}
