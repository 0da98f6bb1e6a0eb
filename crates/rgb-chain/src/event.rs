//! Event nodes: one schedulable unit of start/update/end behaviour.
//!
//! An [`Event`] is a node in a doubly linked chain. Links are stored as
//! [`EventId`] handles into the controller arena, so extending, detaching and
//! splicing chains is index rewiring only.

use core::fmt;

use crate::{Controller, EventId, library::Collection};

/// Callback fired when the controller starts an event.
pub type StartFn = dyn FnMut(&mut Controller, EventId);

/// Callback fired on every tick while an event is active. Returns `true` once
/// the event has finished.
pub type UpdateFn = dyn FnMut(&mut Controller, EventId, UpdateArgs) -> bool;

/// Callback fired when the controller ends an event.
pub type EndFn = dyn FnMut(&mut Controller, EventId);

/// Lifecycle phase of an event, naming its three callback slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    Update,
    End,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Update => "update",
            Self::End => "end",
        })
    }
}

/// Timing passed to update callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UpdateArgs {
    /// Delta for this tick. Reported as `0.0` on the first tick after a start.
    pub delta_time: f32,
    /// Running time accumulated before this tick.
    pub total_time: f32,
}

impl UpdateArgs {
    #[must_use]
    pub const fn new(delta_time: f32, total_time: f32) -> Self {
        Self {
            delta_time,
            total_time,
        }
    }

    /// Running time including this tick.
    #[must_use]
    pub fn accumulated(&self) -> f32 {
        self.total_time + self.delta_time
    }
}

/// Contents of one lifecycle slot.
pub(crate) enum Hook<F: ?Sized> {
    /// Caller-supplied closure.
    Callback(Box<F>),
    /// Slot claimed by a combinator; dispatched to [`crate::library`].
    Collection,
    /// Callback moved out while it executes.
    Firing,
}

/// A node in an event chain.
pub struct Event {
    pub(crate) next: Option<EventId>,
    pub(crate) previous: Option<EventId>,
    /// Between `start_event` and `end_event`.
    pub(crate) running: bool,
    /// Marks the boundary node of a combinator region.
    pub(crate) is_collection: bool,
    /// Boundary that harvested this event as part of its region.
    pub(crate) owner: Option<EventId>,
    pub(crate) elapsed: f32,
    /// No update has been delivered since the last start.
    pub(crate) fresh: bool,
    pub(crate) on_start: Option<Hook<StartFn>>,
    pub(crate) on_update: Option<Hook<UpdateFn>>,
    pub(crate) on_end: Option<Hook<EndFn>>,
    /// Combinator state owned by a boundary node.
    pub(crate) collection: Option<Collection>,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// A fresh event: no neighbours, not running, no callbacks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: None,
            previous: None,
            running: false,
            is_collection: false,
            owner: None,
            elapsed: 0.0,
            fresh: true,
            on_start: None,
            on_update: None,
            on_end: None,
            collection: None,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<EventId> {
        self.next
    }

    #[must_use]
    pub const fn previous(&self) -> Option<EventId> {
        self.previous
    }

    #[must_use]
    pub const fn is_running_singular(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.is_collection
    }

    /// Running time accumulated since the last start.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub const fn has_neighbours(&self) -> bool {
        self.next.is_some() || self.previous.is_some()
    }

    /// Whether the slot for `phase` is taken.
    #[must_use]
    pub const fn has_handler(&self, phase: Phase) -> bool {
        match phase {
            Phase::Start => self.on_start.is_some(),
            Phase::Update => self.on_update.is_some(),
            Phase::End => self.on_end.is_some(),
        }
    }

    /// Resets timing for a new run and marks the event running.
    pub(crate) fn begin(&mut self) {
        self.running = true;
        self.elapsed = 0.0;
        self.fresh = true;
    }

    /// Accumulates `dt` and returns the arguments for this tick's callback.
    pub(crate) fn advance(&mut self, dt: f32) -> UpdateArgs {
        let before = self.elapsed;
        self.elapsed += dt;

        let delta_time = if self.fresh { 0.0 } else { dt };
        self.fresh = false;
        UpdateArgs::new(delta_time, before)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("next", &self.next)
            .field("previous", &self.previous)
            .field("running", &self.running)
            .field("is_collection", &self.is_collection)
            .field("owner", &self.owner)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}
