// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EmitOpts, PinOpts};
use anyhow::Result;
use clap::Parser;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(alias("s"))]
pub struct Opts {
    /// The pin to set
    #[arg(value_name = "pin")]
    pin: u32,

    /// The value to drive the pin to
    ///
    /// Values may be low/off/false/0 or high/on/true/1.
    #[arg(value_name = "value")]
    value: Level,

    #[command(flatten)]
    pin_opts: PinOpts,

    /// The minimum time period to hold the pin at the requested value
    /// before it is released.
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(short = 'p', long = "hold", value_name = "period", value_parser = common::parse_duration)]
    hold_period: Option<Duration>,

    #[command(flatten)]
    emit: EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    match do_cmd(opts) {
        Ok(()) => true,
        Err(e) => {
            emit_error(&opts.emit, &e);
            false
        }
    }
}

fn do_cmd(opts: &Opts) -> Result<()> {
    let id = opts.pin_opts.resolve(opts.pin)?;
    let mut pin = opts.pin_opts.sysfs().output(id);
    common::check_pin("output", &pin)?;
    pin.set_value(opts.value.0)
        .map_err(|e| common::pin_error("output", &pin, e))?;
    if let Some(period) = opts.hold_period {
        thread::sleep(period);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Level(bool);

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower_s = s.to_lowercase();
        let v = match lower_s.as_str() {
            "0" | "low" | "off" | "false" => false,
            "1" | "high" | "on" | "true" => true,
            _ => {
                return Err(InvalidLevel::new(s));
            }
        };
        Ok(Level(v))
    }
}

#[derive(Debug)]
struct InvalidLevel {
    value: String,
}

impl InvalidLevel {
    pub fn new<S: Into<String>>(value: S) -> InvalidLevel {
        InvalidLevel {
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid pin value: '{}'", self.value)
    }
}
impl Error for InvalidLevel {}
