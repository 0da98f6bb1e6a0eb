//! Slot storage for events.
//!
//! Every slot carries its own generation. Removing an event bumps the
//! generation and parks the slot for reuse, so handles issued before the
//! removal no longer resolve.

use crate::EventId;
use crate::event::Event;

struct Slot {
    generation: u32,
    event: Option<Event>,
}

/// Arena of events addressed by [`EventId`].
pub(crate) struct EventArena {
    slots: Vec<Slot>,
    /// Empty slots, reused last-in first-out.
    vacant: Vec<u32>,
    len: usize,
}

impl EventArena {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            len: 0,
        }
    }

    /// Store `event` and return its handle.
    pub(crate) fn insert(&mut self, event: Event) -> EventId {
        self.len += 1;

        if let Some(index) = self.vacant.pop() {
            let slot = &mut self.slots[index as usize];
            slot.event = Some(event);
            return EventId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            event: Some(event),
        });
        EventId::new(index, 0)
    }

    pub(crate) fn get(&self, id: EventId) -> Option<&Event> {
        let slot = self.slots.get(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.event.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        let slot = self.slots.get_mut(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.event.as_mut()
    }

    /// Take the event out and retire its handle.
    pub(crate) fn remove(&mut self, id: EventId) -> Option<Event> {
        let slot = self.slots.get_mut(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        let event = slot.event.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(id.slot());
        self.len -= 1;
        Some(event)
    }

    /// Number of stored events.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }
}
