// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, format_error, EmitOpts};
use clap::Parser;
use gpiosysfs::Gpio;
#[cfg(feature = "serde")]
use serde_derive::Serialize;

#[derive(Debug, Parser)]
#[command(alias("g"))]
pub struct Opts {
    /// The pins to get
    #[arg(value_name = "pin", required = true)]
    pin: Vec<u32>,

    #[command(flatten)]
    pin_opts: common::PinOpts,

    /// Display pin values as '0' or '1', without the pin
    #[arg(long, group = "emit")]
    pub numeric: bool,

    #[command(flatten)]
    emit: common::EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    let res = do_cmd(opts);
    res.emit(opts);
    res.errors.is_empty()
}

fn do_cmd(opts: &Opts) -> CmdResult {
    let mut res = CmdResult::default();
    let sysfs = opts.pin_opts.sysfs();
    for &arg in &opts.pin {
        let id = match opts.pin_opts.resolve(arg) {
            Ok(id) => id,
            Err(e) => {
                res.push_error(&opts.emit, &e);
                continue;
            }
        };
        let mut pin = sysfs.input(id);
        if let Err(e) = common::check_pin("input", &pin) {
            res.push_error(&opts.emit, &e);
            continue;
        }
        match pin.value() {
            Ok(value) => res.values.push(PinValue { pin: arg, value }),
            Err(e) => {
                let e = common::pin_error("input", &pin, e);
                res.push_error(&opts.emit, &e);
            }
        }
    }
    res
}

#[derive(Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
struct CmdResult {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    values: Vec<PinValue>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    errors: Vec<String>,
}
impl CmdResult {
    fn emit(&self, opts: &Opts) {
        #[cfg(feature = "json")]
        if opts.emit.json {
            match serde_json::to_string(self) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("{}", e),
            }
            return;
        }
        self.print(opts);
    }

    fn push_error(&mut self, opts: &EmitOpts, e: &anyhow::Error) {
        self.errors.push(format_error(opts, e))
    }

    fn print(&self, opts: &Opts) {
        let print_values: Vec<String> = self
            .values
            .iter()
            .map(|pv| {
                let v = u8::from(pv.value);
                if opts.numeric {
                    format!("{}", v)
                } else {
                    format!("{}={}", pv.pin, v)
                }
            })
            .collect();
        if !print_values.is_empty() {
            println!("{}", print_values.join(" "));
        }
        for e in &self.errors {
            eprintln!("{}", e);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct PinValue {
    // as identified on the command line
    pin: u32,
    value: bool,
}
#[cfg(feature = "serde")]
impl serde::Serialize for PinValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut s = serializer.serialize_map(Some(1))?;
        s.serialize_entry(&self.pin.to_string(), &u8::from(self.value))?;
        s.end()
    }
}
