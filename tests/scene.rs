#![cfg(not(target_arch = "wasm32"))]

use std::cell::Cell;
use std::rc::Rc;

use galaxy_wasm::galaxy::generate;
use galaxy_wasm::params::GalaxyParams;
use galaxy_wasm::rng::SeededRng;
use galaxy_wasm::scene::{FieldBacking, FieldSlot};

/// Counts releases so tests can pin the release-exactly-once contract.
struct TrackedBacking {
    releases: Rc<Cell<u32>>,
}

impl TrackedBacking {
    fn new(releases: &Rc<Cell<u32>>) -> Self {
        Self {
            releases: releases.clone(),
        }
    }
}

impl FieldBacking for TrackedBacking {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn tiny_field(seed: u64) -> galaxy_wasm::galaxy::ParticleField {
    let params = GalaxyParams {
        count: 16,
        ..GalaxyParams::default()
    };
    generate(&params, &mut SeededRng::from_seed(seed)).unwrap()
}

#[test]
fn replace_releases_previous_backing_exactly_once() {
    let releases = Rc::new(Cell::new(0u32));
    let mut slot = FieldSlot::new();

    slot.replace(tiny_field(1), TrackedBacking::new(&releases));
    assert_eq!(releases.get(), 0, "first attach has nothing to release");

    slot.replace(tiny_field(2), TrackedBacking::new(&releases));
    assert_eq!(releases.get(), 1);

    slot.replace(tiny_field(3), TrackedBacking::new(&releases));
    assert_eq!(releases.get(), 2);

    drop(slot);
    assert_eq!(releases.get(), 3, "drop releases the last attached backing");
}

#[test]
fn clear_detaches_and_releases_once() {
    let releases = Rc::new(Cell::new(0u32));
    let mut slot = FieldSlot::new();
    slot.replace(tiny_field(4), TrackedBacking::new(&releases));

    slot.clear();
    assert_eq!(releases.get(), 1);
    assert!(!slot.is_attached());

    // Clearing an empty slot and dropping it must not double-release.
    slot.clear();
    drop(slot);
    assert_eq!(releases.get(), 1);
}

#[test]
fn only_one_field_attached_at_a_time() {
    let releases = Rc::new(Cell::new(0u32));
    let mut slot = FieldSlot::new();

    let first = tiny_field(5);
    let first_x = first.positions[0];
    slot.replace(first, TrackedBacking::new(&releases));
    assert_eq!(slot.field().unwrap().positions[0], first_x);

    let second = tiny_field(6);
    let second_x = second.positions[0];
    slot.replace(second, TrackedBacking::new(&releases));

    // The new field is fully installed, the old one gone.
    assert_eq!(slot.field().unwrap().positions[0], second_x);
    assert_eq!(slot.field().unwrap().len(), 16);
    assert_eq!(releases.get(), 1);
}

#[test]
fn invalid_parameters_leave_previous_field_attached() {
    let releases = Rc::new(Cell::new(0u32));
    let mut slot = FieldSlot::new();
    slot.replace(tiny_field(7), TrackedBacking::new(&releases));

    // The regeneration path validates before touching the slot.
    let bad = GalaxyParams {
        radius: -1.0,
        ..GalaxyParams::default()
    };
    if let Ok(field) = generate(&bad, &mut SeededRng::from_seed(9)) {
        slot.replace(field, TrackedBacking::new(&releases));
    }

    assert!(slot.is_attached());
    assert_eq!(releases.get(), 0, "failed regeneration must not release");
}
