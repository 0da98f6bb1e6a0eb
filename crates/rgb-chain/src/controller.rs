//! The tick-driven scheduler that owns every event.
//!
//! # Tick phases
//!
//! ```text
//! update(dt):
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1. Admit primary pending adds     (re-entrant adds -> 2nd)  │
//! │  2. Admit secondary pending adds   (re-entrant adds -> next) │
//! │  3. Update every active event      (finished -> remove list) │
//! │  4. End finished events            (successors get queued,   │
//! │                                     owners re-polled)        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events started immediately from an update callback are appended to the
//! active list and visited in the same pass. Events started immediately in
//! phase 4 get their first update on the next tick. Nothing is removed until
//! phase 4.
//!
//! A child harvested by a combinator remembers its boundary. When the child
//! ends in phase 4, the boundary is polled again: it may start its next child
//! right away, or find its region done and join the batch being ended, so a
//! region never finishes later than the tick its last child does.

use core::fmt;

use tracing::{trace, trace_span};

use crate::arena::EventArena;
use crate::event::{Event, Hook};
use crate::library::{self, Collection, CollectionKind, Library};
use crate::queue::{Buffer, PendingQueue};
use crate::{ChainError, ChainResult, EventId, Phase, TickId, UpdateArgs};

/// Owns all events and drives their lifecycle once per tick.
///
/// A host keeps one controller for the lifetime of its frame loop and calls
/// [`Controller::update`] once per frame. Everything runs on the caller's
/// thread; callbacks receive `&mut Controller` and may build and start new
/// events while a tick is in progress.
pub struct Controller {
    events: EventArena,
    /// Events that received `start_event` and not yet `end_event`, in start order.
    current: Vec<EventId>,
    pending: PendingQueue,
    pending_remove: Vec<EventId>,
    tick: TickId,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventArena::new(),
            current: Vec::new(),
            pending: PendingQueue::new(),
            pending_remove: Vec::new(),
            tick: 0,
        }
    }

    /// Create a controller with room for `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: EventArena::with_capacity(capacity),
            current: Vec::with_capacity(capacity),
            pending: PendingQueue::with_capacity(capacity),
            pending_remove: Vec::with_capacity(capacity),
            tick: 0,
        }
    }

    // ==================== Arena ====================

    /// Create a new, detached, unstarted event.
    pub fn create(&mut self) -> EventId {
        let id = self.events.insert(Event::new());
        trace!(event = %id, "created");
        id
    }

    /// Look up a live event.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.get_mut(id)
    }

    pub(crate) fn event(&self, id: EventId) -> ChainResult<&Event> {
        self.get(id).ok_or(ChainError::StaleEvent(id))
    }

    pub(crate) fn event_mut(&mut self, id: EventId) -> ChainResult<&mut Event> {
        self.get_mut(id).ok_or(ChainError::StaleEvent(id))
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Free an idle event's slot. The event is detached from its chain first.
    pub fn release(&mut self, id: EventId) -> ChainResult<()> {
        self.event(id)?;
        if self.is_running_singular(id) || self.is_pending(id) {
            return Err(ChainError::Busy(id));
        }

        self.unlink(id);
        self.events.remove(id);
        trace!(event = %id, "released");
        Ok(())
    }

    // ==================== Chain building ====================

    /// Append a new event as `id`'s successor and return it.
    pub fn extend(&mut self, id: EventId) -> ChainResult<EventId> {
        if self.event(id)?.next.is_some() {
            return Err(ChainError::AlreadyExtended(id));
        }

        let next = self.create();
        self.link(id, next);
        Ok(next)
    }

    /// Clear both neighbour links of `id`. Running state is untouched.
    pub fn detach(&mut self, id: EventId) -> ChainResult<()> {
        self.event(id)?;
        self.unlink(id);
        Ok(())
    }

    /// Turn a brand new event into the root of a sequence.
    ///
    /// Returns the first slot of the sequence, ready to be given callbacks.
    pub fn init(&mut self, id: EventId) -> ChainResult<EventId> {
        if self.event(id)?.has_neighbours() {
            return Err(ChainError::NotDetached(id));
        }
        self.sequence(id)
    }

    pub(crate) fn link(&mut self, previous: EventId, next: EventId) {
        if let Some(event) = self.get_mut(previous) {
            event.next = Some(next);
        }
        if let Some(event) = self.get_mut(next) {
            event.previous = Some(previous);
        }
    }

    /// Break the link between two adjacent events.
    pub(crate) fn cut(&mut self, previous: EventId, next: EventId) {
        if let Some(event) = self.get_mut(previous) {
            if event.next == Some(next) {
                event.next = None;
            }
        }
        if let Some(event) = self.get_mut(next) {
            if event.previous == Some(previous) {
                event.previous = None;
            }
        }
    }

    pub(crate) fn unlink(&mut self, id: EventId) {
        let (previous, next) = match self.get(id) {
            Some(event) => (event.previous, event.next),
            None => return,
        };
        if let Some(previous) = previous {
            self.cut(previous, id);
        }
        if let Some(next) = next {
            self.cut(id, next);
        }
    }

    // ==================== Callbacks ====================

    /// Register the start callback of `id`.
    pub fn on_start<F>(&mut self, id: EventId, callback: F) -> ChainResult<()>
    where
        F: FnMut(&mut Self, EventId) + 'static,
    {
        let event = self.event_mut(id)?;
        if event.on_start.is_some() {
            return Err(ChainError::SlotOccupied {
                event: id,
                phase: Phase::Start,
            });
        }
        event.on_start = Some(Hook::Callback(Box::new(callback)));
        Ok(())
    }

    /// Register the update callback of `id`. The callback returns `true` once
    /// the event is finished.
    pub fn on_update<F>(&mut self, id: EventId, callback: F) -> ChainResult<()>
    where
        F: FnMut(&mut Self, EventId, UpdateArgs) -> bool + 'static,
    {
        let event = self.event_mut(id)?;
        if event.on_update.is_some() {
            return Err(ChainError::SlotOccupied {
                event: id,
                phase: Phase::Update,
            });
        }
        event.on_update = Some(Hook::Callback(Box::new(callback)));
        Ok(())
    }

    /// Register the end callback of `id`.
    pub fn on_end<F>(&mut self, id: EventId, callback: F) -> ChainResult<()>
    where
        F: FnMut(&mut Self, EventId) + 'static,
    {
        let event = self.event_mut(id)?;
        if event.on_end.is_some() {
            return Err(ChainError::SlotOccupied {
                event: id,
                phase: Phase::End,
            });
        }
        event.on_end = Some(Hook::Callback(Box::new(callback)));
        Ok(())
    }

    // ==================== Starting ====================

    /// Request that the chain containing `id` runs.
    ///
    /// The request travels back through `previous` links and schedules the
    /// chain's root; successors follow as their predecessors end. Does nothing
    /// if any event of the chain is already running or pending.
    pub fn start(&mut self, id: EventId) -> ChainResult<EventId> {
        self.event(id)?;
        if self.is_running(id) {
            trace!(event = %id, "start ignored, chain already running");
            return Ok(id);
        }

        let root = self.root(id);
        self.add_event(root, false);
        Ok(id)
    }

    /// Start `id` alone, without walking back to its chain root.
    ///
    /// With `immediately` the event starts synchronously instead of waiting for
    /// the next admission phase.
    pub fn start_single(&mut self, id: EventId, immediately: bool) -> ChainResult<()> {
        self.event(id)?;
        self.add_event(id, immediately);
        Ok(())
    }

    /// Hand an event to the scheduler.
    ///
    /// Events that are already running or pending are left alone.
    pub fn add_event(&mut self, id: EventId, start_immediately: bool) {
        if !self.contains(id) || self.is_running_singular(id) || self.is_pending(id) {
            return;
        }

        if start_immediately {
            self.start_event(id);
            self.current.push(id);
        } else {
            let buffer = self.pending.push(id);
            trace!(event = %id, ?buffer, "queued");
        }
    }

    fn root(&self, id: EventId) -> EventId {
        let mut root = id;
        while let Some(previous) = self.previous(root) {
            root = previous;
        }
        root
    }

    // ==================== Queries ====================

    /// `true` between the event's start and end.
    #[must_use]
    pub fn is_running_singular(&self, id: EventId) -> bool {
        self.get(id).is_some_and(Event::is_running_singular)
    }

    /// `true` while the event waits in either pending buffer.
    #[must_use]
    pub fn is_pending(&self, id: EventId) -> bool {
        self.pending.contains(id)
    }

    /// `true` if any event in `id`'s chain is running or about to start.
    #[must_use]
    pub fn is_running(&self, id: EventId) -> bool {
        self.any_sibling(id, |controller, sibling| {
            controller.is_running_singular(sibling) || controller.is_pending(sibling)
        })
    }

    /// Test `predicate` on `id`, then outward along `previous` and `next`.
    pub fn any_sibling<P>(&self, id: EventId, mut predicate: P) -> bool
    where
        P: FnMut(&Self, EventId) -> bool,
    {
        if !self.contains(id) {
            return false;
        }
        if predicate(self, id) {
            return true;
        }

        let mut cursor = self.previous(id);
        while let Some(sibling) = cursor {
            if predicate(self, sibling) {
                return true;
            }
            cursor = self.previous(sibling);
        }

        let mut cursor = self.next(id);
        while let Some(sibling) = cursor {
            if predicate(self, sibling) {
                return true;
            }
            cursor = self.next(sibling);
        }

        false
    }

    #[must_use]
    pub fn next(&self, id: EventId) -> Option<EventId> {
        self.get(id).and_then(Event::next)
    }

    #[must_use]
    pub fn previous(&self, id: EventId) -> Option<EventId> {
        self.get(id).and_then(Event::previous)
    }

    #[must_use]
    pub fn is_collection(&self, id: EventId) -> bool {
        self.get(id).is_some_and(Event::is_collection)
    }

    /// Combinator kind of a boundary event.
    #[must_use]
    pub fn collection_kind(&self, id: EventId) -> Option<CollectionKind> {
        self.get(id)?.collection.as_ref().map(Collection::kind)
    }

    /// Running time since the event last started.
    #[must_use]
    pub fn elapsed(&self, id: EventId) -> Option<f32> {
        self.get(id).map(Event::elapsed)
    }

    /// Number of live events in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events currently between start and end.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn tick(&self) -> TickId {
        self.tick
    }

    // ==================== Tick ====================

    /// Advance every scheduled event by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.tick += 1;
        let span = trace_span!("tick", tick = self.tick, delta_time);
        let _enter = span.enter();

        self.admit(Buffer::Primary, Buffer::Secondary);
        self.admit(Buffer::Secondary, Buffer::Primary);

        let mut index = 0;
        while let Some(&id) = self.current.get(index) {
            if self.update_event(id, delta_time) {
                self.pending_remove.push(id);
            }
            index += 1;
        }

        // Ending a child can append its boundary to the batch.
        let mut index = 0;
        while let Some(&id) = self.pending_remove.get(index) {
            self.end_event(id);
            if let Some(position) = self.current.iter().position(|&active| active == id) {
                self.current.remove(position);
            }
            index += 1;
        }
        self.pending_remove.clear();
    }

    /// Start every event waiting in `buffer` while new adds go to `intake`.
    fn admit(&mut self, buffer: Buffer, intake: Buffer) {
        self.pending.set_intake(intake);

        let mut index = 0;
        while let Some(id) = self.pending.get(buffer, index) {
            if self.contains(id) && !self.is_running_singular(id) {
                self.start_event(id);
                self.current.push(id);
            }
            index += 1;
        }

        self.pending.clear(buffer);
    }

    fn start_event(&mut self, id: EventId) {
        let Some(event) = self.get_mut(id) else {
            return;
        };
        event.begin();
        trace!(event = %id, "start");

        match event.on_start.take() {
            Some(Hook::Callback(mut callback)) => {
                event.on_start = Some(Hook::Firing);
                callback(self, id);
                if let Some(event) = self.get_mut(id) {
                    event.on_start = Some(Hook::Callback(callback));
                }
            }
            Some(Hook::Collection) => {
                event.on_start = Some(Hook::Collection);
                library::collection_start(self, id);
            }
            other => event.on_start = other,
        }
    }

    /// Returns `true` once the event is finished. An event without an update
    /// callback finishes on its first tick.
    fn update_event(&mut self, id: EventId, delta_time: f32) -> bool {
        let Some(event) = self.get_mut(id) else {
            return true;
        };
        let args = event.advance(delta_time);

        match event.on_update.take() {
            Some(Hook::Callback(mut callback)) => {
                event.on_update = Some(Hook::Firing);
                let finished = callback(self, id, args);
                if let Some(event) = self.get_mut(id) {
                    event.on_update = Some(Hook::Callback(callback));
                }
                finished
            }
            Some(Hook::Collection) => {
                event.on_update = Some(Hook::Collection);
                library::collection_update(self, id)
            }
            Some(Hook::Firing) => {
                event.on_update = Some(Hook::Firing);
                false
            }
            None => true,
        }
    }

    fn end_event(&mut self, id: EventId) {
        let Some(event) = self.get_mut(id) else {
            return;
        };
        match event.on_end.take() {
            Some(Hook::Callback(mut callback)) => {
                event.on_end = Some(Hook::Firing);
                callback(self, id);
                if let Some(event) = self.get_mut(id) {
                    event.on_end = Some(Hook::Callback(callback));
                }
            }
            Some(Hook::Collection) => {
                event.on_end = Some(Hook::Collection);
                library::collection_end(self, id);
            }
            other => event.on_end = other,
        }

        let Some(event) = self.get_mut(id) else {
            return;
        };
        event.running = false;
        let next = event.next;
        let owner = event.owner;
        trace!(event = %id, "end");

        if let Some(next) = next {
            trace!(event = %id, next = %next, "chain advances");
            self.add_event(next, false);
        }
        if let Some(owner) = owner {
            self.settle(owner);
        }
    }

    /// Poll `boundary` after one of its children ended and queue it for
    /// removal in the current pass if its region is done.
    fn settle(&mut self, boundary: EventId) {
        if !self.is_running_singular(boundary) || self.pending_remove.contains(&boundary) {
            return;
        }
        if library::collection_settle(self, boundary) {
            trace!(event = %boundary, "region finished");
            self.pending_remove.push(boundary);
        }
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("events", &self.len())
            .field("active", &self.current.len())
            .field("pending", &self.pending.len())
            .field("tick", &self.tick)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    fn record(controller: &mut Controller, id: EventId, name: &'static str, log: &Log) {
        let start_log = log.clone();
        controller
            .on_start(id, move |_, _| start_log.borrow_mut().push(format!("{name}:start")))
            .unwrap();
        let end_log = log.clone();
        controller
            .on_end(id, move |_, _| end_log.borrow_mut().push(format!("{name}:end")))
            .unwrap();
    }

    #[test]
    fn test_create_is_detached_and_idle() {
        let mut controller = Controller::new();
        let event = controller.create();

        assert!(controller.contains(event));
        assert_eq!(controller.next(event), None);
        assert_eq!(controller.previous(event), None);
        assert!(!controller.is_running_singular(event));
        assert!(!controller.is_running(event));
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_extend_links_both_ways() {
        let mut controller = Controller::new();
        let a = controller.create();
        let b = controller.extend(a).unwrap();

        assert_eq!(controller.next(a), Some(b));
        assert_eq!(controller.previous(b), Some(a));
        assert_eq!(controller.extend(a), Err(ChainError::AlreadyExtended(a)));
    }

    #[test]
    fn test_detach_clears_neighbours() {
        let mut controller = Controller::new();
        let a = controller.create();
        let b = controller.extend(a).unwrap();
        let c = controller.extend(b).unwrap();

        controller.detach(b).unwrap();

        assert_eq!(controller.next(a), None);
        assert_eq!(controller.previous(c), None);
        assert_eq!(controller.next(b), None);
        assert_eq!(controller.previous(b), None);
    }

    #[test]
    fn test_second_handler_is_rejected() {
        let mut controller = Controller::new();
        let event = controller.create();

        controller.on_start(event, |_, _| {}).unwrap();
        controller.on_update(event, |_, _, _| true).unwrap();
        controller.on_end(event, |_, _| {}).unwrap();

        assert_eq!(
            controller.on_start(event, |_, _| {}),
            Err(ChainError::SlotOccupied {
                event,
                phase: Phase::Start
            })
        );
        assert_eq!(
            controller.on_update(event, |_, _, _| false),
            Err(ChainError::SlotOccupied {
                event,
                phase: Phase::Update
            })
        );
        assert_eq!(
            controller.on_end(event, |_, _| {}),
            Err(ChainError::SlotOccupied {
                event,
                phase: Phase::End
            })
        );
    }

    #[test]
    fn test_event_without_update_finishes_on_first_tick() {
        let mut controller = Controller::new();
        let log = Log::default();
        let event = controller.create();
        record(&mut controller, event, "e", &log);

        controller.start(event).unwrap();
        assert!(controller.is_pending(event));
        assert!(controller.is_running(event));
        assert!(!controller.is_running_singular(event));

        controller.update(0.1);

        assert_eq!(*log.borrow(), ["e:start", "e:end"]);
        assert!(!controller.is_running(event));
        assert_eq!(controller.active_len(), 0);
    }

    #[test]
    fn test_running_singular_spans_start_to_end() {
        let mut controller = Controller::new();
        let event = controller.create();
        controller
            .on_update(event, |_, _, args| args.accumulated() >= 0.25)
            .unwrap();

        controller.start(event).unwrap();
        controller.update(0.1);
        assert!(controller.is_running_singular(event));
        controller.update(0.1);
        assert!(controller.is_running_singular(event));
        controller.update(0.1);
        assert!(!controller.is_running_singular(event));
    }

    #[test]
    fn test_start_twice_starts_once() {
        let mut controller = Controller::new();
        let starts = Rc::new(RefCell::new(0));
        let event = controller.create();
        let counter = starts.clone();
        controller
            .on_start(event, move |_, _| *counter.borrow_mut() += 1)
            .unwrap();
        controller.on_update(event, |_, _, _| false).unwrap();

        controller.start(event).unwrap();
        controller.start(event).unwrap();
        controller.update(0.1);
        controller.start(event).unwrap();
        controller.update(0.1);

        assert_eq!(*starts.borrow(), 1);
        assert_eq!(controller.active_len(), 1);
    }

    #[test]
    fn test_start_cascades_to_root() {
        let mut controller = Controller::new();
        let log = Log::default();
        let a = controller.create();
        let b = controller.extend(a).unwrap();
        record(&mut controller, a, "a", &log);
        record(&mut controller, b, "b", &log);

        controller.start(b).unwrap();
        assert!(controller.is_pending(a));
        assert!(!controller.is_pending(b));

        controller.update(0.1);
        assert_eq!(*log.borrow(), ["a:start", "a:end"]);
        assert!(controller.is_pending(b));
        assert!(controller.is_running(a));

        controller.update(0.1);
        assert_eq!(*log.borrow(), ["a:start", "a:end", "b:start", "b:end"]);
        assert!(!controller.is_running(a));
    }

    #[test]
    fn test_start_single_does_not_cascade() {
        let mut controller = Controller::new();
        let log = Log::default();
        let a = controller.create();
        let b = controller.extend(a).unwrap();
        record(&mut controller, a, "a", &log);
        record(&mut controller, b, "b", &log);

        controller.start_single(b, true).unwrap();
        assert!(controller.is_running_singular(b));
        assert!(!controller.is_running_singular(a));
        assert_eq!(*log.borrow(), ["b:start"]);
    }

    #[test]
    fn test_reentrant_add_starts_same_tick() {
        let mut controller = Controller::new();
        let log = Log::default();
        let spawned = controller.create();
        record(&mut controller, spawned, "spawned", &log);
        let spawned_log = log.clone();
        controller
            .on_update(spawned, move |_, _, _| {
                spawned_log.borrow_mut().push("spawned:update".into());
                true
            })
            .unwrap();

        let parent = controller.create();
        controller
            .on_start(parent, move |controller, _| {
                controller.add_event(spawned, false);
            })
            .unwrap();
        controller.on_update(parent, |_, _, _| false).unwrap();

        controller.start(parent).unwrap();
        controller.update(0.1);

        assert_eq!(
            *log.borrow(),
            ["spawned:start", "spawned:update", "spawned:end"]
        );
        assert!(!controller.is_pending(spawned));
    }

    #[test]
    fn test_add_during_update_waits_for_next_tick() {
        let mut controller = Controller::new();
        let late = controller.create();
        controller.on_update(late, |_, _, _| false).unwrap();

        let trigger = controller.create();
        controller
            .on_update(trigger, move |controller, _, _| {
                controller.add_event(late, false);
                true
            })
            .unwrap();

        controller.start(trigger).unwrap();
        controller.update(0.1);
        assert!(controller.is_pending(late));
        assert!(!controller.is_running_singular(late));

        controller.update(0.1);
        assert!(controller.is_running_singular(late));
    }

    #[test]
    fn test_immediate_add_during_update_is_updated_same_tick() {
        let mut controller = Controller::new();
        let updates = Rc::new(RefCell::new(0));
        let child = controller.create();
        let counter = updates.clone();
        controller
            .on_update(child, move |_, _, _| {
                *counter.borrow_mut() += 1;
                false
            })
            .unwrap();

        let parent = controller.create();
        controller
            .on_update(parent, move |controller, _, _| {
                controller.add_event(child, true);
                false
            })
            .unwrap();

        controller.start(parent).unwrap();
        controller.update(0.1);

        assert!(controller.is_running_singular(child));
        assert_eq!(*updates.borrow(), 1);
    }

    #[test]
    fn test_release_rejects_busy_and_detects_stale() {
        let mut controller = Controller::new();
        let a = controller.create();
        let b = controller.extend(a).unwrap();

        controller.start(a).unwrap();
        assert_eq!(controller.release(a), Err(ChainError::Busy(a)));

        controller.release(b).unwrap();
        assert_eq!(controller.next(a), None);
        assert!(!controller.contains(b));
        assert_eq!(controller.extend(b), Err(ChainError::StaleEvent(b)));
        assert!(!controller.is_running(b));

        let c = controller.create();
        assert_eq!(c.slot(), b.slot());
        assert_ne!(c, b);
    }

    #[test]
    fn test_init_requires_detached_event() {
        let mut controller = Controller::new();
        let a = controller.create();
        let b = controller.extend(a).unwrap();

        assert_eq!(controller.init(b), Err(ChainError::NotDetached(b)));

        let root = controller.create();
        let first = controller.init(root).unwrap();
        assert!(controller.is_collection(root));
        assert_eq!(controller.previous(first), Some(root));
    }

    #[test]
    fn test_any_sibling_scans_both_directions() {
        let mut controller = Controller::new();
        let a = controller.create();
        let b = controller.extend(a).unwrap();
        let c = controller.extend(b).unwrap();

        assert!(controller.any_sibling(b, |_, id| id == a));
        assert!(controller.any_sibling(b, |_, id| id == c));
        assert!(controller.any_sibling(a, |_, id| id == c));
        assert!(!controller.any_sibling(a, |_, _| false));
    }

    #[test]
    fn test_tick_counter() {
        let mut controller = Controller::with_capacity(8);
        assert_eq!(controller.tick(), 0);
        controller.update(0.016);
        controller.update(0.016);
        assert_eq!(controller.tick(), 2);
    }
}
