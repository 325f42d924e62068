use std::fmt;

use crate::{
    error::{ScrubError, ScrubResult},
    transition::Transition,
};

/// One segment of a playable animation.
///
/// A phase never tracks its own playback position, so the same phase can be
/// replayed any number of times.
#[derive(Clone)]
pub enum Phase {
    /// One transition reused for both directions. Reverse playback feeds it
    /// the raw driver value, so it sees progress sweep 1 -> 0.
    Uniform(Transition),
    /// Independent transitions per direction. Both always see progress sweep
    /// 0 -> 1 regardless of playback direction.
    Bidirectional {
        forward: Transition,
        reverse: Transition,
    },
}

impl Phase {
    pub fn uniform(transition: impl Into<Transition>) -> Self {
        Self::Uniform(transition.into())
    }

    pub fn bidirectional(forward: impl Into<Transition>, reverse: impl Into<Transition>) -> Self {
        Self::Bidirectional {
            forward: forward.into(),
            reverse: reverse.into(),
        }
    }

    /// Build a phase from optional parts, as handed over by a loosely typed
    /// caller. Exactly one shape must be populated: either `uniform` alone, or
    /// both `forward` and `reverse`.
    pub fn from_parts(
        uniform: Option<Transition>,
        forward: Option<Transition>,
        reverse: Option<Transition>,
    ) -> ScrubResult<Self> {
        match (uniform, forward, reverse) {
            (Some(t), None, None) => Ok(Self::Uniform(t)),
            (None, Some(forward), Some(reverse)) => Ok(Self::Bidirectional { forward, reverse }),
            (None, None, None) => Err(ScrubError::validation(
                "phase needs a uniform transition or a forward/reverse pair",
            )),
            (Some(_), _, _) => Err(ScrubError::validation(
                "phase cannot have both a uniform transition and a forward/reverse pair",
            )),
            (None, Some(_), None) => Err(ScrubError::validation(
                "bidirectional phase is missing its reverse transition",
            )),
            (None, None, Some(_)) => Err(ScrubError::validation(
                "bidirectional phase is missing its forward transition",
            )),
        }
    }

    pub fn forward(&self, progress: f64) {
        match self {
            Self::Uniform(t) => t.apply(progress),
            Self::Bidirectional { forward, .. } => forward.apply(progress),
        }
    }

    pub fn reverse(&self, progress: f64) {
        match self {
            Self::Uniform(t) => t.apply(progress),
            Self::Bidirectional { reverse, .. } => reverse.apply(progress),
        }
    }

    /// Argument handed to [`Phase::reverse`] for a reverse tick, given the
    /// display progress (`1 - driver`).
    ///
    /// Uniform phases get `1 - display` (the raw driver value); bidirectional
    /// phases get the display progress itself.
    pub fn reverse_argument(&self, display_progress: f64) -> f64 {
        match self {
            Self::Uniform(_) => 1.0 - display_progress,
            Self::Bidirectional { .. } => display_progress,
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    pub fn is_bidirectional(&self) -> bool {
        matches!(self, Self::Bidirectional { .. })
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(_) => f.write_str("Phase::Uniform"),
            Self::Bidirectional { .. } => f.write_str("Phase::Bidirectional"),
        }
    }
}
