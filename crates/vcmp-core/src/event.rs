//! Event dispatcher (§4.E): turns host callbacks and property mutations
//! into typed, ordered events delivered to script-registered listeners.
//!
//! Grounded on `myq2-server`'s dispatch-table idiom (a `HashMap` from a
//! discriminant to an ordered `Vec` of handlers, walked synchronously on
//! the calling thread) generalized from "one server command table" to
//! "one table per (entity, event-kind) plus one for process-wide events".

use crate::entity::Handle;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use vcmp_common::{PoolKind, Vector3};

/// Every event kind the core can deliver (§4.E, §6.1). Listeners register
/// against one of these; vetoable kinds are enumerated in
/// [`EventKind::is_vetoable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ServerInit,
    ServerShutdown,
    ServerFrame,
    PluginCommand,
    IncomingConnection,
    ClientScriptData,
    PlayerConnect,
    PlayerDisconnect,
    PlayerRequestClass,
    PlayerRequestSpawn,
    PlayerSpawn,
    PlayerDeath,
    PlayerUpdate,
    PlayerRequestEnterVehicle,
    PlayerEnterVehicle,
    PlayerExitVehicle,
    PlayerNameChange,
    PlayerStateChange,
    PlayerActionChange,
    PlayerOnFireChange,
    PlayerCrouchChange,
    PlayerGameKeysChange,
    PlayerTypingBeginEnd,
    PlayerAwayChange,
    PlayerMessage,
    PlayerCommand,
    PlayerPrivateMessage,
    PlayerKeyBindDownUp,
    PlayerSpectate,
    PlayerCrashReport,
    VehicleUpdate,
    VehicleExplode,
    VehicleRespawn,
    VehiclePartStatus,
    VehicleTyreStatus,
    VehicleDamage,
    VehicleRadio,
    VehicleHandlingRule,
    ObjectShot,
    ObjectTouched,
    PickupPickAttempt,
    PickupPicked,
    PickupRespawn,
    CheckpointEnter,
    CheckpointExit,
    PoolChange,
    PerformanceReport,
    PlayerWorldChange,
    PlayerSecondaryWorldChange,
    PlayerSkinChange,
    PlayerTeamChange,
    PlayerScoreChange,
    PlayerMoneyChange,
    PlayerWantedLevelChange,
    PlayerImmunityChange,
    PlayerAlphaChange,
    PlayerAdminChange,
    PlayerOptionChange,
    VehiclePartStatusChange,
    VehicleTyreStatusChange,
    VehicleHandlingChange,
    CheckpointRadiusChange,
    PickupAlphaChange,
    PositionChange,
    HeadingChange,
    HealthChange,
    ArmourChange,
    WeaponChange,
    DistanceTravelled,
    EnterArea,
    LeaveArea,
}

impl EventKind {
    /// The set of events a listener may cancel by returning `false`
    /// (§4.E, §5 "Cancellation").
    pub fn is_vetoable(self) -> bool {
        matches!(
            self,
            EventKind::IncomingConnection
                | EventKind::PlayerRequestClass
                | EventKind::PlayerRequestSpawn
                | EventKind::PlayerRequestEnterVehicle
                | EventKind::PickupPickAttempt
                | EventKind::PlayerMessage
                | EventKind::PlayerCommand
                | EventKind::PlayerPrivateMessage
                | EventKind::PluginCommand
        )
    }
}

/// A loosely-typed scalar used by the passthrough host-callback events
/// that carry no richer shape in this core (name changes, key binds,
/// messages, …) — §6.1's callback table lists roughly forty shapes; the
/// handful reused across properties get a dedicated [`Event`] variant,
/// the rest travel as `Host { kind, args }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f32),
    Str(String),
    Bool(bool),
}

/// A `(old, new)` property-change pair, the shape every "before" event
/// in §4.C/§4.D carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change<T> {
    pub old: T,
    pub new: T,
}

#[derive(Debug, Clone)]
pub enum Event {
    Host {
        kind: EventKind,
        args: Vec<Arg>,
    },
    PoolChange {
        pool: PoolKind,
        handle: Handle,
        created: bool,
    },
    PlayerWorldChange(Change<i32>),
    PlayerSecondaryWorldChange(Change<i32>),
    PlayerSkinChange(Change<i32>),
    PlayerTeamChange(Change<i32>),
    PlayerScoreChange(Change<i32>),
    PlayerMoneyChange(Change<i32>),
    PlayerWantedLevelChange(Change<i32>),
    PlayerImmunityChange(Change<u32>),
    PlayerAlphaChange(Change<u8>),
    PlayerAdminChange(Change<bool>),
    PlayerOptionChange { option: i32, change: Change<bool> },
    VehiclePartStatusChange { part: i32, change: Change<i32> },
    VehicleTyreStatusChange { tyre: i32, change: Change<i32> },
    VehicleHandlingChange { rule: i32, change: Change<f64> },
    CheckpointRadiusChange(Change<f32>),
    PickupAlphaChange(Change<u8>),
    PositionChange(Change<Vector3>),
    HeadingChange(Change<f32>),
    HealthChange(Change<f32>),
    ArmourChange(Change<f32>),
    WeaponChange(Change<i32>),
    DistanceTravelled(f32),
    EnterArea { area: u64 },
    LeaveArea { area: u64 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Host { kind, .. } => *kind,
            Event::PoolChange { .. } => EventKind::PoolChange,
            Event::PlayerWorldChange(_) => EventKind::PlayerWorldChange,
            Event::PlayerSecondaryWorldChange(_) => EventKind::PlayerSecondaryWorldChange,
            Event::PlayerSkinChange(_) => EventKind::PlayerSkinChange,
            Event::PlayerTeamChange(_) => EventKind::PlayerTeamChange,
            Event::PlayerScoreChange(_) => EventKind::PlayerScoreChange,
            Event::PlayerMoneyChange(_) => EventKind::PlayerMoneyChange,
            Event::PlayerWantedLevelChange(_) => EventKind::PlayerWantedLevelChange,
            Event::PlayerImmunityChange(_) => EventKind::PlayerImmunityChange,
            Event::PlayerAlphaChange(_) => EventKind::PlayerAlphaChange,
            Event::PlayerAdminChange(_) => EventKind::PlayerAdminChange,
            Event::PlayerOptionChange { .. } => EventKind::PlayerOptionChange,
            Event::VehiclePartStatusChange { .. } => EventKind::VehiclePartStatusChange,
            Event::VehicleTyreStatusChange { .. } => EventKind::VehicleTyreStatusChange,
            Event::VehicleHandlingChange { .. } => EventKind::VehicleHandlingChange,
            Event::CheckpointRadiusChange(_) => EventKind::CheckpointRadiusChange,
            Event::PickupAlphaChange(_) => EventKind::PickupAlphaChange,
            Event::PositionChange(_) => EventKind::PositionChange,
            Event::HeadingChange(_) => EventKind::HeadingChange,
            Event::HealthChange(_) => EventKind::HealthChange,
            Event::ArmourChange(_) => EventKind::ArmourChange,
            Event::WeaponChange(_) => EventKind::WeaponChange,
            Event::DistanceTravelled(_) => EventKind::DistanceTravelled,
            Event::EnterArea { .. } => EventKind::EnterArea,
            Event::LeaveArea { .. } => EventKind::LeaveArea,
        }
    }
}

/// What a listener returns. Notify-only listeners always answer
/// `Continue`; vetoable listeners may answer `Cancel` to short-circuit
/// (§4.E, §5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Cancel,
}

type Callback = Box<dyn FnMut(&Event) -> Verdict>;

struct Listener {
    id: u64,
    #[allow(dead_code)]
    owner: u64,
    callback: Callback,
}

/// One listener table: either global (server init/frame/pool-change, …)
/// or scoped to a single `(pool, handle)` pair (§3 "Event listener").
/// Registration order is preserved; `RefCell` because dispatch can run
/// while a handler is in the middle of registering another listener.
#[derive(Default)]
pub struct Dispatcher {
    global: RefCell<HashMap<EventKind, Vec<Listener>>>,
    scoped: RefCell<HashMap<(PoolKind, Handle, EventKind), Vec<Listener>>>,
    next_id: Cell<u64>,
}

/// Handle returned by `on`/`on_entity`, usable to unregister later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Register a process-wide listener (owner ref `owner`, for parity
    /// with script-side reference counting — unused by the core itself).
    pub fn on(&self, kind: EventKind, owner: u64, callback: impl FnMut(&Event) -> Verdict + 'static) -> ListenerId {
        let id = self.alloc_id();
        self.global.borrow_mut().entry(kind).or_default().push(Listener {
            id,
            owner,
            callback: Box::new(callback),
        });
        ListenerId(id)
    }

    /// Register a listener scoped to one entity (§3: the per-record
    /// event table).
    pub fn on_entity(
        &self,
        pool: PoolKind,
        handle: Handle,
        kind: EventKind,
        owner: u64,
        callback: impl FnMut(&Event) -> Verdict + 'static,
    ) -> ListenerId {
        let id = self.alloc_id();
        self.scoped
            .borrow_mut()
            .entry((pool, handle, kind))
            .or_default()
            .push(Listener {
                id,
                owner,
                callback: Box::new(callback),
            });
        ListenerId(id)
    }

    pub fn remove(&self, kind: EventKind, id: ListenerId) {
        if let Some(v) = self.global.borrow_mut().get_mut(&kind) {
            v.retain(|l| l.id != id.0);
        }
    }

    pub fn remove_entity(&self, pool: PoolKind, handle: Handle, kind: EventKind, id: ListenerId) {
        if let Some(v) = self.scoped.borrow_mut().get_mut(&(pool, handle, kind)) {
            v.retain(|l| l.id != id.0);
        }
    }

    /// Drops every scoped listener for one entity — called by the
    /// lifecycle facade when a record is released (§4.C `release`).
    pub fn clear_entity(&self, pool: PoolKind, handle: Handle) {
        self.scoped.borrow_mut().retain(|(p, h, _), _| !(*p == pool && *h == handle));
    }

    /// Dispatch a process-wide event. Returns `true` unless a vetoable
    /// kind was cancelled by some listener.
    pub fn dispatch(&self, event: &Event) -> bool {
        self.run(None, event)
    }

    /// Dispatch an event scoped to one entity — runs the entity's
    /// listeners for this kind, then the global ones, both in
    /// registration order (§4.E: "listeners are invoked synchronously in
    /// registration order").
    pub fn dispatch_entity(&self, pool: PoolKind, handle: Handle, event: &Event) -> bool {
        self.run(Some((pool, handle)), event)
    }

    fn run(&self, target: Option<(PoolKind, Handle)>, event: &Event) -> bool {
        let kind = event.kind();
        let vetoable = kind.is_vetoable();

        if let Some((pool, handle)) = target {
            let key = (pool, handle, kind);
            let mut scoped = self.scoped.borrow_mut();
            if let Some(listeners) = scoped.get_mut(&key) {
                for l in listeners.iter_mut() {
                    if (l.callback)(event) == Verdict::Cancel && vetoable {
                        return false;
                    }
                }
            }
        }

        let mut global = self.global.borrow_mut();
        if let Some(listeners) = global.get_mut(&kind) {
            for l in listeners.iter_mut() {
                if (l.callback)(event) == Verdict::Cancel && vetoable {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let d = Dispatcher::new();
        let order = std::rc::Rc::new(RefCell::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();
        d.on(EventKind::ServerFrame, 0, move |_| {
            o1.borrow_mut().push(1);
            Verdict::Continue
        });
        d.on(EventKind::ServerFrame, 0, move |_| {
            o2.borrow_mut().push(2);
            Verdict::Continue
        });
        d.dispatch(&Event::Host { kind: EventKind::ServerFrame, args: vec![] });
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn vetoable_event_short_circuits_on_first_cancel() {
        let d = Dispatcher::new();
        let called = std::rc::Rc::new(Cell::new(false));
        let called2 = called.clone();
        d.on(EventKind::PlayerMessage, 0, |_| Verdict::Cancel);
        d.on(EventKind::PlayerMessage, 0, move |_| {
            called2.set(true);
            Verdict::Continue
        });
        let accepted = d.dispatch(&Event::Host { kind: EventKind::PlayerMessage, args: vec![] });
        assert!(!accepted);
        assert!(!called.get());
    }

    #[test]
    fn non_vetoable_event_runs_every_listener_regardless_of_return() {
        let d = Dispatcher::new();
        let count = std::rc::Rc::new(Cell::new(0));
        let c1 = count.clone();
        let c2 = count.clone();
        d.on(EventKind::ServerFrame, 0, move |_| {
            c1.set(c1.get() + 1);
            Verdict::Cancel
        });
        d.on(EventKind::ServerFrame, 0, move |_| {
            c2.set(c2.get() + 1);
            Verdict::Continue
        });
        d.dispatch(&Event::Host { kind: EventKind::ServerFrame, args: vec![] });
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn entity_scoped_listeners_run_before_global_ones() {
        let d = Dispatcher::new();
        let order = std::rc::Rc::new(RefCell::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();
        d.on(EventKind::PlayerWorldChange, 0, move |_| {
            o1.borrow_mut().push("global");
            Verdict::Continue
        });
        d.on_entity(PoolKind::Player, 3, EventKind::PlayerWorldChange, 0, move |_| {
            o2.borrow_mut().push("entity");
            Verdict::Continue
        });
        d.dispatch_entity(
            PoolKind::Player,
            3,
            &Event::PlayerWorldChange(Change { old: 1, new: 5 }),
        );
        assert_eq!(*order.borrow(), vec!["entity", "global"]);
    }
}
