//! The displayed timeline and the generation token guarding it.
//!
//! Every fetch is tagged with a [`Generation`] before it is issued. When
//! responses come back out of order, only the one matching the latest
//! generation replaces what is shown; older ones are dropped.

use crate::timeline::Timeline;

/// Token identifying one timeline request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

#[derive(Debug, Default)]
pub struct TimelineView {
    issued: u64,
    shown: Option<(Generation, Timeline)>,
}

impl TimelineView {
    /// Starts a new request, superseding every earlier one.
    pub fn begin(&mut self) -> Generation {
        self.issued += 1;
        Generation(self.issued)
    }

    /// Offers a completed build. Returns `false` and keeps the current
    /// timeline if `generation` has been superseded.
    pub fn accept(&mut self, generation: Generation, timeline: Timeline) -> bool {
        if generation.0 != self.issued {
            tracing::debug!(
                stale = generation.0,
                latest = self.issued,
                "discarding superseded timeline"
            );
            return false;
        }
        self.shown = Some((generation, timeline));
        true
    }

    pub fn current(&self) -> Option<&Timeline> {
        self.shown.as_ref().map(|(_, timeline)| timeline)
    }

    /// Generation of the displayed timeline, if any.
    pub fn shown_generation(&self) -> Option<Generation> {
        self.shown.as_ref().map(|(generation, _)| *generation)
    }
}
