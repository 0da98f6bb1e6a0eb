//! Combinators that turn a chain into structured control flow.
//!
//! A combinator claims all three lifecycle slots of a boundary event and keeps
//! its state in a [`Collection`] stored on that event. When the boundary
//! starts, it harvests its children:
//!
//! - chain regions (`sequence`, `compound`, `repeat`): every event after the
//!   boundary up to the next boundary. Harvested events are detached and the
//!   boundary is linked straight to the next boundary, so the next region
//!   starts when this one ends.
//! - body regions (`*_with`): a separate chain built by a closure.
//!
//! Harvesting happens once; restarting a boundary reuses its children. Every
//! harvested event records its boundary, and the controller polls the boundary
//! again whenever one of them ends, so the next child starts and a finished
//! region ends on the same tick as the child that completed it.

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::debug;

use crate::event::Hook;
use crate::{ChainError, ChainResult, Controller, EventId, Phase};

type Units = SmallVec<[EventId; 4]>;

/// How a boundary runs its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// One child at a time, in chain order.
    Sequence,
    /// All children at once; done when every child is done.
    Compound,
    /// Like `Sequence`, over the given number of passes.
    Repeat(u32),
}

#[derive(Debug, Clone, Copy)]
enum Source {
    /// Events following the boundary in its own chain.
    Chain,
    /// A separate chain rooted at the given event.
    Body(EventId),
}

/// Per-boundary combinator state.
#[derive(Debug)]
pub(crate) struct Collection {
    kind: CollectionKind,
    source: Source,
    /// Children, filled on first start.
    units: Option<Units>,
    queue: VecDeque<EventId>,
    active: Option<EventId>,
    passes_left: u32,
}

impl Collection {
    const fn new(kind: CollectionKind, source: Source) -> Self {
        Self {
            kind,
            source,
            units: None,
            queue: VecDeque::new(),
            active: None,
            passes_left: 0,
        }
    }

    pub(crate) const fn kind(&self) -> CollectionKind {
        self.kind
    }

    fn units(&self) -> &[EventId] {
        self.units.as_deref().unwrap_or_default()
    }

    fn refill(&mut self) {
        if let Some(units) = &self.units {
            self.queue.extend(units.iter().copied());
        }
    }

    fn start(&mut self, controller: &mut Controller, boundary: EventId) {
        if self.units.is_none() {
            self.units = Some(harvest(controller, boundary, self.kind, self.source));
        }
        self.queue.clear();
        self.active = None;
        self.passes_left = 0;

        match self.kind {
            CollectionKind::Sequence => {
                self.refill();
                self.start_next(controller, boundary);
            }
            CollectionKind::Repeat(0) => {}
            CollectionKind::Repeat(times) => {
                self.passes_left = times - 1;
                self.refill();
                self.start_next(controller, boundary);
            }
            CollectionKind::Compound => {
                for &unit in self.units() {
                    start_unit(controller, unit);
                }
            }
        }
    }

    /// Returns `true` once the region is finished.
    fn poll(&mut self, controller: &mut Controller, boundary: EventId) -> bool {
        if self.kind == CollectionKind::Compound {
            return self.units().iter().all(|&unit| !controller.is_running(unit));
        }

        if self.active.is_some_and(|unit| controller.is_running(unit)) {
            return false;
        }
        if self.start_next(controller, boundary) {
            return false;
        }
        if self.passes_left > 0 && !self.units().is_empty() {
            self.passes_left -= 1;
            debug!(%boundary, passes_left = self.passes_left, "loop pass");
            self.refill();
            return !self.start_next(controller, boundary);
        }
        true
    }

    fn start_next(&mut self, controller: &mut Controller, boundary: EventId) -> bool {
        self.active = self.queue.pop_front();
        match self.active {
            Some(unit) => {
                debug!(%boundary, child = %unit, "next child");
                start_unit(controller, unit);
                true
            }
            None => false,
        }
    }

    fn end(&mut self) {
        self.queue.clear();
        self.active = None;
        self.passes_left = 0;
    }
}

fn start_unit(controller: &mut Controller, unit: EventId) {
    if let Err(err) = controller.start_single(unit, true) {
        debug!(%unit, %err, "child skipped");
    }
}

fn harvest(
    controller: &mut Controller,
    boundary: EventId,
    kind: CollectionKind,
    source: Source,
) -> Units {
    let units = match (source, kind) {
        (Source::Chain, _) => harvest_region(controller, boundary),
        (Source::Body(root), CollectionKind::Compound) => split_units(controller, root),
        (Source::Body(root), _) => SmallVec::from_slice(&[root]),
    };
    for &unit in &units {
        adopt(controller, unit, boundary);
    }
    debug!(%boundary, ?kind, children = units.len(), "harvested");
    units
}

/// Point `unit` and everything chained after it at `boundary`.
fn adopt(controller: &mut Controller, unit: EventId, boundary: EventId) {
    let mut cursor = Some(unit);
    while let Some(node) = cursor {
        if let Some(event) = controller.get_mut(node) {
            event.owner = Some(boundary);
        }
        cursor = controller.next(node);
    }
}

/// Take every event after `boundary` up to the next boundary.
fn harvest_region(controller: &mut Controller, boundary: EventId) -> Units {
    let mut units = Units::new();
    let mut cursor = controller.next(boundary);
    while let Some(node) = cursor {
        if controller.is_collection(node) {
            break;
        }
        units.push(node);
        cursor = controller.next(node);
    }

    for &unit in &units {
        controller.unlink(unit);
    }
    if let Some(region) = cursor {
        controller.link(boundary, region);
    }
    units
}

/// Split a body chain into independently running units: each plain event is
/// its own unit, each boundary keeps the events of its region.
fn split_units(controller: &mut Controller, root: EventId) -> Units {
    let mut units = Units::new();
    let mut cursor = Some(root);
    while let Some(unit) = cursor {
        units.push(unit);
        cursor = controller.next(unit);
        if controller.is_collection(unit) {
            while let Some(node) = cursor {
                if controller.is_collection(node) {
                    break;
                }
                cursor = controller.next(node);
            }
        }
    }

    for &unit in &units[1..] {
        if let Some(previous) = controller.previous(unit) {
            controller.cut(previous, unit);
        }
    }
    units
}

pub(crate) fn collection_start(controller: &mut Controller, boundary: EventId) {
    with_collection(controller, boundary, |collection, controller| {
        collection.start(controller, boundary);
    });
}

pub(crate) fn collection_update(controller: &mut Controller, boundary: EventId) -> bool {
    with_collection(controller, boundary, |collection, controller| {
        collection.poll(controller, boundary)
    })
    .unwrap_or(true)
}

/// Poll after one of the boundary's children ended.
pub(crate) fn collection_settle(controller: &mut Controller, boundary: EventId) -> bool {
    with_collection(controller, boundary, |collection, controller| {
        collection.poll(controller, boundary)
    })
    .unwrap_or(false)
}

pub(crate) fn collection_end(controller: &mut Controller, boundary: EventId) {
    with_collection(controller, boundary, |collection, _| collection.end());
}

/// Run `f` with the boundary's state moved out of the arena.
fn with_collection<R>(
    controller: &mut Controller,
    boundary: EventId,
    f: impl FnOnce(&mut Collection, &mut Controller) -> R,
) -> Option<R> {
    let mut collection = controller.get_mut(boundary)?.collection.take()?;
    let result = f(&mut collection, controller);
    if let Some(event) = controller.get_mut(boundary) {
        event.collection = Some(collection);
    }
    Some(result)
}

fn check_claimable(controller: &Controller, ev: EventId) -> ChainResult<()> {
    let event = controller.event(ev)?;
    for phase in [Phase::Start, Phase::Update, Phase::End] {
        if event.has_handler(phase) {
            return Err(ChainError::SlotOccupied { event: ev, phase });
        }
    }
    if event.next().is_some() {
        return Err(ChainError::AlreadyExtended(ev));
    }
    Ok(())
}

fn collect(
    controller: &mut Controller,
    ev: EventId,
    kind: CollectionKind,
    source: Source,
) -> ChainResult<EventId> {
    check_claimable(controller, ev)?;

    let event = controller.event_mut(ev)?;
    event.on_start = Some(Hook::Collection);
    event.on_update = Some(Hook::Collection);
    event.on_end = Some(Hook::Collection);
    event.is_collection = true;
    event.collection = Some(Collection::new(kind, source));
    debug!(boundary = %ev, ?kind, "collection boundary");

    controller.extend(ev)
}

fn collect_body<F>(
    controller: &mut Controller,
    ev: EventId,
    kind: CollectionKind,
    build: F,
) -> ChainResult<EventId>
where
    F: FnOnce(&mut Controller, EventId) -> ChainResult<()>,
{
    check_claimable(controller, ev)?;
    let body = controller.create();
    if let Err(err) = build(controller, body) {
        discard_chain(controller, body);
        return Err(err);
    }
    collect(controller, ev, kind, Source::Body(body))
}

/// Release every event of the chain rooted at `root`.
fn discard_chain(controller: &mut Controller, root: EventId) {
    let mut nodes = Units::new();
    let mut cursor = Some(root);
    while let Some(node) = cursor {
        nodes.push(node);
        cursor = controller.next(node);
    }
    for node in nodes {
        if let Err(err) = controller.release(node) {
            debug!(%node, %err, "body event kept");
        }
    }
}

/// Structured flow on top of event chains.
///
/// Every combinator turns `ev` into a boundary and returns `ev`'s new
/// successor, so calls compose into one chain:
///
/// ```
/// use rgb_chain::prelude::*;
///
/// # fn main() -> Result<(), ChainError> {
/// let mut controller = Controller::new();
/// let root = controller.create();
///
/// // root runs `fade` then `wait`
/// let fade = controller.sequence(root)?;
/// controller.on_update(fade, |_, _, args| args.accumulated() >= 0.5)?;
/// let wait = controller.extend(fade)?;
/// controller.on_update(wait, |_, _, args| args.accumulated() >= 1.0)?;
///
/// controller.start(root)?;
/// for _ in 0..120 {
///     controller.update(1.0 / 60.0);
/// }
/// assert!(!controller.is_running(root));
/// # Ok(())
/// # }
/// ```
pub trait Library {
    /// Run the following events one at a time, in chain order.
    fn sequence(&mut self, ev: EventId) -> ChainResult<EventId>;

    /// Run the following events all at once; finish when the last one does.
    fn compound(&mut self, ev: EventId) -> ChainResult<EventId>;

    /// Run the following events in order, `times` passes over.
    fn repeat(&mut self, ev: EventId, times: u32) -> ChainResult<EventId>;

    /// Run a body chain built by `build` as the sequence's single child.
    ///
    /// The returned event continues the outer chain once the body is done.
    fn sequence_with<F>(&mut self, ev: EventId, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>;

    /// Run each event (or nested region) of a body chain concurrently.
    fn compound_with<F>(&mut self, ev: EventId, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>;

    /// Run a body chain `times` times.
    fn repeat_with<F>(&mut self, ev: EventId, times: u32, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>;
}

impl Library for Controller {
    fn sequence(&mut self, ev: EventId) -> ChainResult<EventId> {
        collect(self, ev, CollectionKind::Sequence, Source::Chain)
    }

    fn compound(&mut self, ev: EventId) -> ChainResult<EventId> {
        collect(self, ev, CollectionKind::Compound, Source::Chain)
    }

    fn repeat(&mut self, ev: EventId, times: u32) -> ChainResult<EventId> {
        collect(self, ev, CollectionKind::Repeat(times), Source::Chain)
    }

    fn sequence_with<F>(&mut self, ev: EventId, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>,
    {
        collect_body(self, ev, CollectionKind::Sequence, build)
    }

    fn compound_with<F>(&mut self, ev: EventId, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>,
    {
        collect_body(self, ev, CollectionKind::Compound, build)
    }

    fn repeat_with<F>(&mut self, ev: EventId, times: u32, build: F) -> ChainResult<EventId>
    where
        F: FnOnce(&mut Controller, EventId) -> ChainResult<()>,
    {
        collect_body(self, ev, CollectionKind::Repeat(times), build)
    }
}
