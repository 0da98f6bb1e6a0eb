#![allow(clippy::float_cmp)]
#![allow(clippy::missing_fields_in_debug)]

//! RGB Chain - frame-driven event chains
//!
//! Cooperative scheduling of delayed and animated behaviour for hosts that
//! drive their logic from a fixed `update(dt)` call per frame. No threads, no
//! timers: an event stays active across ticks until its update callback says
//! it is done.
//!
//! # Key Concepts
//!
//! - **Event**: one schedulable unit with start/update/end callbacks
//! - **Chain**: events linked by [`Controller::extend`]; a chain runs one event
//!   after another
//! - **Controller**: owns every event and runs the per-tick lifecycle
//! - **Boundary**: an event claimed by a [`Library`] combinator (sequence,
//!   compound, repeat) that runs the events after it as a structured region
//!
//! # Tick Model
//!
//! ```text
//! host frame ──► Controller::update(dt)
//!                  │
//!                  ├─ admit pending (primary, then re-entrant secondary)
//!                  │    └─ start callbacks may queue more events
//!                  ├─ update active events ──► update callbacks
//!                  └─ end finished events ──► end callbacks, successors queued
//! ```
//!
//! # Example
//!
//! ```
//! use rgb_chain::prelude::*;
//!
//! # fn main() -> Result<(), ChainError> {
//! let mut controller = Controller::new();
//!
//! let blink = controller.create();
//! let on = controller.repeat(blink, 3)?;
//! controller.on_update(on, |_, _, args| args.accumulated() >= 0.1)?;
//! let off = controller.extend(on)?;
//! controller.on_update(off, |_, _, args| args.accumulated() >= 0.1)?;
//!
//! controller.start(blink)?;
//! while controller.is_running(blink) {
//!     controller.update(0.05);
//! }
//! # Ok(())
//! # }
//! ```

mod arena;
mod controller;
mod error;
mod event;
mod id;
mod library;
mod queue;

pub use controller::Controller;
pub use error::{ChainError, ChainResult};
pub use event::{EndFn, Event, Phase, StartFn, UpdateArgs, UpdateFn};
pub use id::EventId;
pub use library::{CollectionKind, Library};

/// A tick counter (monotonically increasing).
pub type TickId = u64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ChainError, ChainResult, Controller, EventId, Library, Phase, UpdateArgs};
}
