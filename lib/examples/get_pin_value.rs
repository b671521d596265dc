// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Basic example of reading a single pin.

use gpiosysfs::{Gpio, InputPin};

fn main() {
    let mut pin = InputPin::new(17);
    if !pin.is_ok() {
        eprintln!("gpio17: {}", pin.status());
        std::process::exit(1);
    }
    match pin.value() {
        Ok(value) => println!("17={}", u8::from(value)),
        Err(_) => eprintln!("gpio17: {}", pin.status()),
    }
}
