// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiosysfs_sim::{Error, Level, Simpleton};
use std::fs;

#[test]
fn goes_live() {
    let s = Simpleton::new(4);
    let sim = s.sim();
    assert!(s.root().is_dir());
    assert!(s.root().join("export").is_file());
    assert!(s.root().join("unexport").is_file());
    assert_eq!(sim.pins(), vec![0, 1, 2, 3]);
    for pin in sim.pins() {
        let dir = sim.pin_dir(pin);
        assert!(dir.join("direction").is_file());
        assert!(dir.join("value").is_file());
        assert!(dir.join("edge").is_file());
        assert!(dir.join("active_low").is_file());
        assert_eq!(sim.get_active_low(pin).unwrap(), "0");
        assert_eq!(sim.get_direction(pin).unwrap(), "in");
        assert_eq!(sim.get_edge(pin).unwrap(), "none");
        assert_eq!(sim.get_level(pin).unwrap(), Level::Low);
    }
    assert_eq!(sim.last_exported().unwrap(), None);
    assert_eq!(sim.last_unexported().unwrap(), None);
}

#[test]
fn cleans_up_on_drop() {
    let s = Simpleton::new(2);
    let root = s.root().to_path_buf();
    assert!(root.exists());
    drop(s);
    assert!(!root.exists());
}

#[test]
fn pull_and_toggle() {
    let s = Simpleton::new(3);
    s.pullup(1).unwrap();
    assert_eq!(s.get_level(1).unwrap(), Level::High);
    assert_eq!(s.get_level(2).unwrap(), Level::Low);
    assert_eq!(s.toggle(1).unwrap(), Level::Low);
    assert_eq!(s.get_level(1).unwrap(), Level::Low);
    assert_eq!(s.toggle(1).unwrap(), Level::High);
    s.pulldown(1).unwrap();
    assert_eq!(s.get_level(1).unwrap(), Level::Low);
}

#[test]
fn unknown_pin() {
    let s = Simpleton::new(3);
    assert!(matches!(s.pullup(7), Err(Error::UnknownPin(7))));
    assert!(matches!(s.get_level(3), Err(Error::UnknownPin(3))));
}

#[test]
fn records_control_writes() {
    let s = Simpleton::new(3);
    let sim = s.sim();
    fs::write(s.root().join("export"), "2").unwrap();
    assert_eq!(sim.last_exported().unwrap(), Some(2));
    fs::write(s.root().join("unexport"), "2\n").unwrap();
    assert_eq!(sim.last_unexported().unwrap(), Some(2));
}

#[test]
fn wire() {
    let s = Simpleton::new(4);
    let sim = s.sim();
    sim.wire(1, 3).unwrap();
    s.pullup(1).unwrap();
    assert_eq!(s.get_level(3).unwrap(), Level::High);
    fs::write(sim.pin_dir(3).join("value"), "0").unwrap();
    assert_eq!(s.get_level(1).unwrap(), Level::Low);
}

#[test]
fn remove() {
    let mut sim = gpiosysfs_sim::builder().with_pins([17, 27]).live().unwrap();
    let dir = sim.pin_dir(17);
    sim.remove(17).unwrap();
    assert!(!dir.exists());
    assert_eq!(sim.pins(), vec![27]);
    assert!(matches!(sim.get_level(17), Err(Error::UnknownPin(17))));
}

#[test]
fn named_sim_exists() {
    let name = gpiosysfs_sim::unique_name("named_sim_exists", None);
    let sim = gpiosysfs_sim::builder()
        .with_name(name.clone())
        .with_pin(1)
        .live()
        .unwrap();
    assert_eq!(sim.name(), name);
    let res = gpiosysfs_sim::builder().with_name(name).live();
    assert!(matches!(res, Err(Error::SimulatorExists(_))));
}

#[test]
fn refuse_export() {
    let s = Simpleton::new(2);
    let sim = s.sim();
    sim.refuse_export().unwrap();
    assert!(fs::write(s.root().join("export"), "1").is_err());
    // pins and unexport untouched
    assert!(sim.pin_dir(1).join("value").is_file());
    assert_eq!(sim.last_unexported().unwrap(), None);
}
