use approx::assert_abs_diff_eq;
use glam::DVec3;

use skylark_core::enums::CameraMode;

use crate::fsm::{cycle, is_program_driven, place};

#[test]
fn test_cycle_order() {
    assert_eq!(cycle(CameraMode::Chase), CameraMode::Cockpit);
    assert_eq!(cycle(CameraMode::Cockpit), CameraMode::Free);
    assert_eq!(cycle(CameraMode::Free), CameraMode::Chase);
}

#[test]
fn test_three_cycles_return_to_start() {
    for start in [CameraMode::Chase, CameraMode::Cockpit, CameraMode::Free] {
        let mode = cycle(cycle(cycle(start)));
        assert_eq!(mode, start);
    }
}

#[test]
fn test_chase_placement() {
    let aircraft = DVec3::new(10.0, 3.0, -4.0);
    let camera = place(CameraMode::Chase, aircraft).unwrap();
    assert_eq!(camera.eye, DVec3::new(10.0, 8.0, -19.0));
    assert_eq!(camera.target, aircraft);
}

#[test]
fn test_cockpit_placement() {
    let aircraft = DVec3::new(1.0, 2.0, 3.0);
    let camera = place(CameraMode::Cockpit, aircraft).unwrap();
    assert_eq!(camera.eye, DVec3::new(1.0, 4.0, 4.0));
    // Fixed world +Z look-ahead, 10 units
    assert_eq!(camera.target, DVec3::new(1.0, 2.0, 13.0));
    assert_abs_diff_eq!((camera.target - aircraft).length(), 10.0);
}

#[test]
fn test_free_mode_does_not_place() {
    assert!(place(CameraMode::Free, DVec3::ZERO).is_none());
    assert!(!is_program_driven(CameraMode::Free));
    assert!(is_program_driven(CameraMode::Chase));
    assert!(is_program_driven(CameraMode::Cockpit));
}
