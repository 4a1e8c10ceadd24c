//! Per-frame tracking engine (§4.F): samples opt-in properties on every
//! `OnServerFrame` and diff-emits changes.
//!
//! Grounded on `myq2-game`'s per-frame "think" pass over the edict array
//! (`G_RunFrame` walking `g_edicts[1..=maxclients]`) — generalized to a
//! configurable per-property sample/diff instead of game physics.

use crate::area::AreaManager;
use crate::entity::{EntityFlags, Handle, Record, Registry};
use crate::event::{Change, Dispatcher, Event};
use crate::host::HostAdapter;
use std::collections::HashSet;
use vcmp_common::{PoolKind, Vector3};

/// Last-sampled values plus the opt-in counters/accumulator (§3 "Per-pool
/// record", §4.F). Lives inside every [`Record`]; only meaningful for
/// player/vehicle pools, harmless (always zero) elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct TrackingState {
    pub last_position: Vector3,
    pub last_health: f32,
    pub last_armour: f32,
    pub last_heading: f32,
    pub last_weapon: i32,
    pub distance: f32,
    /// Positive = emit a diff event this frame; decremented as a
    /// one-shot budget when acting that way (§4.F step 3).
    pub track_position: i32,
    pub track_heading: i32,
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            last_position: Vector3::NIL,
            last_health: 0.0,
            last_armour: 0.0,
            last_heading: 0.0,
            last_weapon: 0,
            distance: 0.0,
            track_position: 0,
            track_heading: 0,
        }
    }
}

/// Runs one tracking pass over players then vehicles, ascending handle
/// within each pool (§4.F "Ordering is deterministic per frame").
pub fn run_tracking_pass(registry: &Registry, host: &dyn HostAdapter, dispatcher: &Dispatcher, areas: &AreaManager) {
    for pool in [PoolKind::Player, PoolKind::Vehicle] {
        for (handle, record) in registry.iterate(pool) {
            let tracking = record.tracking.borrow();
            let has_any_tracking =
                !record.flags().is_empty() || tracking.track_position > 0 || tracking.track_heading > 0;
            drop(tracking);
            if !has_any_tracking {
                continue;
            }
            sample_one(pool, handle, record, host, dispatcher, areas);
        }
    }
}

fn sample_one(
    pool: PoolKind,
    handle: Handle,
    record: &Record,
    host: &dyn HostAdapter,
    dispatcher: &Dispatcher,
    areas: &AreaManager,
) {
    let position = match pool {
        PoolKind::Player => host.get_player_position(handle),
        PoolKind::Vehicle => host.get_vehicle_position(handle),
        _ => return,
    };
    let Ok(position) = position else { return };

    let mut state = *record.tracking.borrow();
    let delta = position.distance(&state.last_position);

    if record.flags().contains(EntityFlags::DIST_TRACK) {
        state.distance += delta;
    }

    if state.track_position > 0 && position != state.last_position {
        dispatcher.dispatch_entity(
            pool,
            handle,
            &Event::PositionChange(Change { old: state.last_position, new: position }),
        );
        state.track_position -= 1;
    }

    if pool == PoolKind::Player {
        if let Ok(heading) = host.get_player_heading(handle) {
            if state.track_heading > 0 && heading != state.last_heading {
                dispatcher.dispatch_entity(pool, handle, &Event::HeadingChange(Change { old: state.last_heading, new: heading }));
                state.track_heading -= 1;
            }
            state.last_heading = heading;
        }
        if let Ok(health) = host.get_player_health(handle) {
            if health != state.last_health {
                dispatcher.dispatch_entity(pool, handle, &Event::HealthChange(Change { old: state.last_health, new: health }));
            }
            state.last_health = health;
        }
        if let Ok(armour) = host.get_player_armour(handle) {
            if armour != state.last_armour {
                dispatcher.dispatch_entity(pool, handle, &Event::ArmourChange(Change { old: state.last_armour, new: armour }));
            }
            state.last_armour = armour;
        }
        if let Ok(weapon) = host.get_player_weapon(handle) {
            if weapon != state.last_weapon {
                dispatcher.dispatch_entity(pool, handle, &Event::WeaponChange(Change { old: state.last_weapon, new: weapon }));
            }
            state.last_weapon = weapon;
        }
    }

    if record.flags().contains(EntityFlags::DIST_TRACK) && delta > 0.0 {
        dispatcher.dispatch_entity(pool, handle, &Event::DistanceTravelled(state.distance));
    }

    if record.flags().contains(EntityFlags::AREA_TRACK) {
        retest_areas(pool, handle, record, position, dispatcher, areas);
    }

    state.last_position = position;
    *record.tracking.borrow_mut() = state;
}

/// Step 5 (§4.F): re-test the entity's position against the grid and
/// emit `enter_area`/`leave_area` for the set difference against what
/// the record already thought it was inside.
fn retest_areas(pool: PoolKind, handle: Handle, record: &Record, position: Vector3, dispatcher: &Dispatcher, areas: &AreaManager) {
    let now: HashSet<u64> = {
        let mut hits = HashSet::new();
        areas.test_point(position.x, position.y, |area_id, _owner| {
            hits.insert(area_id);
        });
        hits
    };
    let was: HashSet<u64> = record.areas().into_iter().collect();

    for &area in now.difference(&was) {
        record.area_insert(area);
        dispatcher.dispatch_entity(pool, handle, &Event::EnterArea { area });
    }
    for &area in was.difference(&now) {
        record.area_remove(area);
        dispatcher.dispatch_entity(pool, handle, &Event::LeaveArea { area });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, Verdict};
    use crate::host::stub::StubHostAdapter;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn distance_accumulates_only_with_dist_track_flag() {
        let registry = Registry::new();
        let host = StubHostAdapter::new();
        let dispatcher = Dispatcher::new();
        let areas = crate::area::AreaManager::new();
        let record = registry.allocate(PoolKind::Player, 0).unwrap();
        record.set_flags(EntityFlags::DIST_TRACK);
        host.set_position_for_test(0, Vector3::new(0.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        host.set_position_for_test(0, Vector3::new(3.0, 4.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        assert_eq!(record.tracking.borrow().distance, 5.0);
    }

    #[test]
    fn position_diff_emits_only_while_track_counter_positive() {
        let registry = Registry::new();
        let host = StubHostAdapter::new();
        let dispatcher = Dispatcher::new();
        let areas = crate::area::AreaManager::new();
        let record = registry.allocate(PoolKind::Player, 0).unwrap();
        record.tracking.borrow_mut().track_position = 1;
        let seen = Rc::new(Cell::new(0));
        let seen2 = seen.clone();
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::PositionChange, 0, move |_| {
            seen2.set(seen2.get() + 1);
            Verdict::Continue
        });
        host.set_position_for_test(0, Vector3::new(1.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        host.set_position_for_test(0, Vector3::new(2.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn area_enter_then_leave_matches_seed_scenario() {
        use crate::area::{Area, AreaManager};
        use vcmp_common::Vector2;

        let registry = Registry::new();
        let host = StubHostAdapter::new();
        let dispatcher = Dispatcher::new();
        let areas = AreaManager::new();

        // Area covering x >= 0 within the local cell, per §8 scenario 4.
        let area_id = areas.insert_area(Area::from_points(&[
            Vector2::new(0.0, -100.0),
            Vector2::new(100.0, -100.0),
            Vector2::new(100.0, 100.0),
            Vector2::new(0.0, 100.0),
        ]));
        areas.manage(area_id, 1);

        let record = registry.allocate(PoolKind::Player, 0).unwrap();
        record.set_flags(EntityFlags::AREA_TRACK);

        let entered = Rc::new(Cell::new(0));
        let left = Rc::new(Cell::new(0));
        let e = entered.clone();
        let l = left.clone();
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::EnterArea, 0, move |_| {
            e.set(e.get() + 1);
            Verdict::Continue
        });
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::LeaveArea, 0, move |_| {
            l.set(l.get() + 1);
            Verdict::Continue
        });

        host.set_position_for_test(0, Vector3::new(-1.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        assert_eq!(entered.get(), 0);

        host.set_position_for_test(0, Vector3::new(1.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        assert_eq!(entered.get(), 1);
        assert_eq!(left.get(), 0);

        host.set_position_for_test(0, Vector3::new(-1.0, 0.0, 0.0));
        run_tracking_pass(&registry, &host, &dispatcher, &areas);
        assert_eq!(entered.get(), 1);
        assert_eq!(left.get(), 1);
    }
}
