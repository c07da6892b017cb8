use flow_core::{Direction, LexiconEntry, Segment, SegmentKind};
use flow_session::SessionResponse;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FlowError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FlowSegment {
    pub source: String,
    pub text: String,
    pub kind: FlowSegmentKind,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FlowEntry {
    pub flowing: String,
    pub class: String,
    pub senses: Vec<String>,
}

/// Fields rewritten by a session call; `None` leaves the text box alone.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FlowResponse {
    pub direction: Option<FlowDirection>,
    pub english: Option<String>,
    pub flowing: Option<String>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum FlowDirection {
    EnglishToFlowing,
    FlowingToEnglish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum FlowSegmentKind {
    Exact,
    Stemmed,
    TenseMarker,
    Pronoun,
    Untranslatable,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<Direction> for FlowDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::EnglishToFlowing => FlowDirection::EnglishToFlowing,
            Direction::FlowingToEnglish => FlowDirection::FlowingToEnglish,
        }
    }
}

impl From<FlowDirection> for Direction {
    fn from(d: FlowDirection) -> Self {
        match d {
            FlowDirection::EnglishToFlowing => Direction::EnglishToFlowing,
            FlowDirection::FlowingToEnglish => Direction::FlowingToEnglish,
        }
    }
}

impl From<Segment> for FlowSegment {
    fn from(s: Segment) -> Self {
        let kind = match s.kind {
            SegmentKind::Exact => FlowSegmentKind::Exact,
            SegmentKind::Stemmed => FlowSegmentKind::Stemmed,
            SegmentKind::TenseMarker => FlowSegmentKind::TenseMarker,
            SegmentKind::Pronoun => FlowSegmentKind::Pronoun,
            SegmentKind::Untranslatable => FlowSegmentKind::Untranslatable,
        };
        FlowSegment {
            source: s.source,
            text: s.text,
            kind,
        }
    }
}

impl From<&LexiconEntry> for FlowEntry {
    fn from(e: &LexiconEntry) -> Self {
        FlowEntry {
            flowing: e.flowing.clone(),
            class: e.class.to_string(),
            senses: e.senses.clone(),
        }
    }
}

impl From<SessionResponse> for FlowResponse {
    fn from(r: SessionResponse) -> Self {
        FlowResponse {
            direction: r.direction.map(Into::into),
            english: r.english,
            flowing: r.flowing,
        }
    }
}
