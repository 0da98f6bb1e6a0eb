//! Event handles.

use core::fmt;

/// Handle to an event owned by a [`Controller`](crate::Controller).
///
/// Events have reference identity: two handles are equal only if they name the
/// same arena slot in the same generation. Once an event is released its slot
/// is reused under a new generation, so the old handle stops resolving.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId {
    slot: u32,
    generation: u32,
}

impl EventId {
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Arena slot the event lives in.
    #[must_use]
    pub const fn slot(self) -> u32 {
        self.slot
    }

    /// Number of times the slot had been released when this handle was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event({}v{})", self.slot, self.generation)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.slot, self.generation)
    }
}
