// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiosysfs::{Edge, Error, Gpio, Status};
use gpiosysfs_sim::Simpleton;
use std::time::{Duration, Instant};

mod common;
use common::sysfs;

#[test]
fn value() -> anyhow::Result<()> {
    let s = Simpleton::new(3);
    let mut pin = sysfs(s.sim()).request_input(2)?;

    assert!(!pin.value()?);
    s.pullup(2)?;
    assert!(pin.value()?);
    assert_eq!(pin.status(), Status::Ok);
    s.pulldown(2)?;
    assert!(!pin.value()?);
    s.toggle(2)?;
    assert!(pin.value()?);
    Ok(())
}

#[test]
fn edge_round_trip() -> anyhow::Result<()> {
    let s = Simpleton::new(1);
    let sim = s.sim();
    let mut pin = sysfs(sim).request_input(0)?;

    assert_eq!(pin.edge()?, Edge::None);
    for edge in [Edge::Rising, Edge::Falling, Edge::Both, Edge::None] {
        pin.set_edge(edge)?;
        assert_eq!(sim.get_edge(0)?, edge.as_str());
        assert_eq!(pin.edge()?, edge);
        assert_eq!(pin.status(), Status::Ok);
    }
    Ok(())
}

#[test]
fn edge_unrecognised() -> anyhow::Result<()> {
    let s = Simpleton::new(1);
    let sim = s.sim();
    let mut pin = sysfs(sim).request_input(0)?;

    sim.set_edge(0, "sideways\n")?;
    let res = pin.edge();
    match &res {
        Err(Error::UnexpectedValue(_, v)) => assert_eq!(v, "sideways"),
        _ => panic!("unexpected result: {:?}", res),
    }
    assert_eq!(pin.status(), Status::FileReadError);
    Ok(())
}

#[test]
fn wait_zero_timeout_is_read() -> anyhow::Result<()> {
    let s = Simpleton::new(2);
    let mut pin = sysfs(s.sim()).request_input(1)?;

    for pull in [true, false] {
        if pull {
            s.pullup(1)?;
        } else {
            s.pulldown(1)?;
        }
        let read = pin.value()?;
        let read_status = pin.status();
        let waited = pin.wait_value(Duration::ZERO)?;
        assert_eq!(waited, read);
        assert_eq!(waited, pull);
        assert_eq!(pin.status(), read_status);
    }
    Ok(())
}

#[test]
fn wait_times_out() -> anyhow::Result<()> {
    let s = Simpleton::new(2);
    let mut pin = sysfs(s.sim()).request_input(0)?;

    let timeout = Duration::from_secs(1);
    let start = Instant::now();
    let res = pin.wait_value(timeout);
    let elapsed = start.elapsed();
    assert!(matches!(res, Err(ref e) if e.is_timeout()));
    assert_eq!(pin.status(), Status::Timeout);
    assert!(pin.status().is_retryable());
    assert!(elapsed >= timeout, "returned early: {:?}", elapsed);
    assert!(elapsed < 2 * timeout, "returned late: {:?}", elapsed);

    // the handle survives the timeout
    assert!(!pin.value()?);
    assert_eq!(pin.status(), Status::Ok);
    Ok(())
}

#[test]
fn wait_times_out_with_edge() -> anyhow::Result<()> {
    let s = Simpleton::new(2);
    let mut pin = sysfs(s.sim()).request_input(1)?;
    pin.set_edge(Edge::Both)?;

    let res = pin.wait_value(Duration::from_millis(50));
    assert!(res.unwrap_err().is_timeout());
    assert_eq!(pin.status(), Status::Timeout);
    Ok(())
}

#[test]
fn new_on_default_root() {
    // only meaningful when the default root is absent, as on a build host
    if gpiosysfs::Sysfs::default().root().exists() {
        return;
    }
    let pin = gpiosysfs::InputPin::new(4);
    assert!(!pin.is_ok());
    assert_eq!(pin.status(), Status::FileOpenError);
}
