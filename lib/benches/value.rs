// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{criterion_group, criterion_main, Bencher, Criterion};

use gpiosysfs::Sysfs;
use gpiosysfs_sim::Simpleton;
use std::time::Duration;

criterion_group!(benches, benchmarks);
criterion_main!(benches);

fn benchmarks(c: &mut Criterion) {
    c.bench_function("get value", get_value);
    c.bench_function("wait value zero timeout", wait_zero);
    c.bench_function("set value", set_value);
    c.bench_function("claim and release", claim_release);
}

// determine time taken to read the level of an input
#[allow(unused_variables)]
fn get_value(b: &mut Bencher) {
    let s = Simpleton::new(4);
    let mut pin = Sysfs::new(s.root()).request_input(1).unwrap();

    b.iter(|| {
        let value = pin.value();
    });
}

// determine the overhead of wait_value when it degrades to a read
#[allow(unused_variables)]
fn wait_zero(b: &mut Bencher) {
    let s = Simpleton::new(4);
    let mut pin = Sysfs::new(s.root()).request_input(1).unwrap();

    b.iter(|| {
        let value = pin.wait_value(Duration::ZERO);
    });
}

// determine time taken to drive the level of an output
fn set_value(b: &mut Bencher) {
    let s = Simpleton::new(4);
    let mut pin = Sysfs::new(s.root()).request_output(2).unwrap();
    let mut value = false;

    b.iter(|| {
        pin.set_value(value).unwrap();
        value = !value;
    });
}

// determine time taken to export, configure and unexport a pin
fn claim_release(b: &mut Bencher) {
    let s = Simpleton::new(4);
    let sysfs = Sysfs::new(s.root());

    b.iter(|| {
        let pin = sysfs.request_input(3).unwrap();
        drop(pin);
    });
}
