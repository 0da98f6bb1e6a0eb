//! Double-buffered pending-add queue.
//!
//! Events scheduled before a tick land in the primary buffer. While the
//! controller admits the primary buffer, intake switches to the secondary
//! buffer, so events scheduled by start callbacks are admitted in the same
//! tick right after the primary batch:
//!
//! ```text
//! Tick N:
//!   intake = Secondary   admit Primary   (re-entrant adds -> Secondary)
//!   intake = Primary     admit Secondary (re-entrant adds -> Primary, tick N+1)
//! ```

use crate::EventId;

/// One half of the pending queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Buffer {
    Primary,
    Secondary,
}

/// Pending adds waiting for the next admission phase.
#[derive(Debug)]
pub(crate) struct PendingQueue {
    primary: Vec<EventId>,
    secondary: Vec<EventId>,
    /// Buffer receiving new pushes.
    intake: Buffer,
}

impl PendingQueue {
    /// Empty queue taking pushes into the primary buffer.
    pub(crate) const fn new() -> Self {
        Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            intake: Buffer::Primary,
        }
    }

    /// Empty queue with room for `capacity` events per buffer.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            primary: Vec::with_capacity(capacity),
            secondary: Vec::with_capacity(capacity),
            intake: Buffer::Primary,
        }
    }

    /// Queue an event into the current intake buffer.
    pub(crate) fn push(&mut self, id: EventId) -> Buffer {
        let intake = self.intake;
        self.buffer_mut(intake).push(id);
        intake
    }

    /// Route subsequent pushes to `buffer`.
    pub(crate) const fn set_intake(&mut self, buffer: Buffer) {
        self.intake = buffer;
    }

    /// Event at `index` in `buffer`, if any.
    pub(crate) fn get(&self, buffer: Buffer, index: usize) -> Option<EventId> {
        self.buffer(buffer).get(index).copied()
    }

    /// Drop everything in `buffer` once it has been admitted.
    pub(crate) fn clear(&mut self, buffer: Buffer) {
        self.buffer_mut(buffer).clear();
    }

    /// Whether `id` is waiting in either buffer.
    pub(crate) fn contains(&self, id: EventId) -> bool {
        self.primary.contains(&id) || self.secondary.contains(&id)
    }

    /// Events waiting across both buffers.
    pub(crate) fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    fn buffer(&self, buffer: Buffer) -> &Vec<EventId> {
        match buffer {
            Buffer::Primary => &self.primary,
            Buffer::Secondary => &self.secondary,
        }
    }

    fn buffer_mut(&mut self, buffer: Buffer) -> &mut Vec<EventId> {
        match buffer {
            Buffer::Primary => &mut self.primary,
            Buffer::Secondary => &mut self.secondary,
        }
    }
}
