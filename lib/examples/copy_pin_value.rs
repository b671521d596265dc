// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Basic example of copying the level of one pin to another,
// reporting failures via the pin status.

use gpiosysfs::{Gpio, Sysfs};
use std::thread;
use std::time::Duration;

fn main() {
    let sysfs = Sysfs::from_env();
    let mut input = sysfs.input(23);
    if !input.is_ok() {
        eprintln!("input: {}", input.status());
        return;
    }
    let mut output = sysfs.output(24);
    if !output.is_ok() {
        eprintln!("output: {}", output.status());
        return;
    }
    loop {
        let Ok(value) = input.value() else {
            eprintln!("input: {}", input.status());
            return;
        };
        if output.set_value(value).is_err() {
            eprintln!("output: {}", output.status());
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
}
