// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Basic example of watching for edges on a single pin.

use anyhow::Context;
use gpiosysfs::{header, Edge, Sysfs};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pin = Sysfs::from_env()
        .request_input(header::PIN_16)
        .context("Failed to request pin")?;

    // select the edges to wake the wait
    pin.set_edge(Edge::Both).context("Failed to set edge")?;

    loop {
        match pin.wait_value(Duration::from_secs(1)) {
            Ok(value) => println!("{}={}", header::PIN_16, u8::from(value)),
            // no edge this time around
            Err(e) if e.is_timeout() => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
