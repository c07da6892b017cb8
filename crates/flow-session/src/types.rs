use flow_core::Direction;

/// One of the two text surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    English,
    Flowing,
}

impl Field {
    /// Direction that translates out of this field.
    pub fn source_direction(self) -> Direction {
        match self {
            Field::English => Direction::EnglishToFlowing,
            Field::Flowing => Direction::FlowingToEnglish,
        }
    }

    /// Field written by a translation in `direction`.
    pub fn target_of(direction: Direction) -> Field {
        match direction {
            Direction::EnglishToFlowing => Field::Flowing,
            Direction::FlowingToEnglish => Field::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Translate on every edit instead of only on `translate_both`.
    pub live: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { live: true }
    }
}

/// Fields rewritten by a session call. `None` means untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResponse {
    pub direction: Option<Direction>,
    pub english: Option<String>,
    pub flowing: Option<String>,
}

impl SessionResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.english.is_none() && self.flowing.is_none()
    }
}
