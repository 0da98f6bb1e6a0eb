//! Chain-building error types.

use thiserror::Error;

use crate::{EventId, Phase};

/// Usage violations raised while building or scheduling chains.
///
/// All of these are programming errors in how a chain was composed; the
/// scheduler itself never produces them during a tick.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A lifecycle slot already holds a callback (or a combinator).
    #[error("event {event} already has a {phase} handler")]
    SlotOccupied { event: EventId, phase: Phase },

    /// `extend` was called on an event that already has a successor.
    #[error("event {0} already has a next event")]
    AlreadyExtended(EventId),

    /// Only events without neighbours can be initialised.
    #[error("event {0} is already part of a chain")]
    NotDetached(EventId),

    /// The handle refers to a released slot.
    #[error("stale event handle: {0}")]
    StaleEvent(EventId),

    /// The event is running or queued and cannot be released.
    #[error("event {0} is running or pending")]
    Busy(EventId),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
