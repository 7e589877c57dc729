use std::collections::VecDeque;

/// Number of cursor markers in the trail.
pub const TRAIL_LENGTH: usize = 12;
/// History entries kept per trail marker.
pub const HISTORY_PER_MARKER: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: i64,
}

impl PointerSample {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Bounded pointer history, oldest first. Evicts by count, not by age.
#[derive(Clone, Debug)]
pub struct PointerHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
}

impl PointerHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// History sized for a trail of `trail_length` markers.
    pub fn for_trail(trail_length: usize) -> Self {
        Self::new(trail_length.saturating_mul(HISTORY_PER_MARKER))
    }

    pub fn record(&mut self, x: f64, y: f64, now_ms: i64) {
        self.samples.push_back(PointerSample {
            x,
            y,
            timestamp_ms: now_ms,
        });
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&PointerSample> {
        self.samples.back()
    }

    /// Sample at `index`, where 0 is the oldest retained entry.
    pub fn get(&self, index: usize) -> Option<&PointerSample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }
}

impl Default for PointerHistory {
    fn default() -> Self {
        Self::for_trail(TRAIL_LENGTH)
    }
}
