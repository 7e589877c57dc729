/// Glyph shown on the disclosure control; rotated to read as a cross when open.
pub const DISCLOSURE_GLYPH: &str = "+";
pub const OPEN_ROTATION_DEG: f64 = 45.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Closed,
    Open,
}

impl DisclosureState {
    pub fn is_open(self) -> bool {
        self == DisclosureState::Open
    }

    pub fn rotation_deg(self) -> f64 {
        match self {
            DisclosureState::Closed => 0.0,
            DisclosureState::Open => OPEN_ROTATION_DEG,
        }
    }

    pub fn glyph_transform(self) -> String {
        format!("rotate({}deg)", self.rotation_deg())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Disclosure {
    state: DisclosureState,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn toggle(&mut self) -> DisclosureState {
        self.state = match self.state {
            DisclosureState::Closed => DisclosureState::Open,
            DisclosureState::Open => DisclosureState::Closed,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_alternates() {
        let mut disclosure = Disclosure::new();
        assert_eq!(disclosure.state(), DisclosureState::Closed);
        assert_eq!(disclosure.toggle(), DisclosureState::Open);
        assert_eq!(disclosure.toggle(), DisclosureState::Closed);
    }

    #[test]
    fn affordance_follows_state() {
        assert_eq!(DisclosureState::Closed.glyph_transform(), "rotate(0deg)");
        assert_eq!(DisclosureState::Open.glyph_transform(), "rotate(45deg)");
    }
}
