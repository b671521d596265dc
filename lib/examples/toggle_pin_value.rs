// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Basic example of toggling a single pin.

use anyhow::Context;
use gpiosysfs::Sysfs;
use std::result::Result;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let id = 22;
    let mut value = true;

    let mut pin = Sysfs::from_env()
        .request_output(id)
        .context("Failed to request pin")?;

    loop {
        pin.set_value(value).context("Failed to set value")?;
        println!("{}={}", id, u8::from(value));
        thread::sleep(Duration::from_millis(500));
        value = !value;
    }
}
