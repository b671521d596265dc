// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EdgeFlags, EmitOpts, PinOpts};
use anyhow::Result;
use clap::Parser;
#[cfg(feature = "serde")]
use serde_derive::Serialize;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(alias("w"))]
pub struct Opts {
    /// The pin to wait on
    #[arg(value_name = "pin")]
    pin: u32,

    #[command(flatten)]
    pin_opts: PinOpts,

    /// The edges that end the wait
    #[arg(short, long, value_enum, default_value = "both")]
    edge: EdgeFlags,

    /// The maximum time to wait for an edge
    ///
    /// A timeout is not an error, and is reported as "timeout".
    /// A zero timeout reads the level without waiting.
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(short, long, value_name = "period", default_value = "1s", value_parser = common::parse_duration)]
    timeout: Duration,

    #[command(flatten)]
    emit: EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    match do_cmd(opts) {
        Ok(res) => {
            res.emit(opts);
            true
        }
        Err(e) => {
            emit_error(&opts.emit, &e);
            false
        }
    }
}

fn do_cmd(opts: &Opts) -> Result<CmdResult> {
    let id = opts.pin_opts.resolve(opts.pin)?;
    let mut pin = opts.pin_opts.sysfs().input(id);
    common::check_pin("input", &pin)?;
    pin.set_edge(opts.edge.into())
        .map_err(|e| common::pin_error("input", &pin, e))?;
    match pin.wait_value(opts.timeout) {
        Ok(value) => Ok(CmdResult {
            value: Some(u8::from(value)),
            timeout: false,
        }),
        Err(e) if e.is_timeout() => Ok(CmdResult {
            value: None,
            timeout: true,
        }),
        Err(e) => Err(common::pin_error("input", &pin, e)),
    }
}

#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
struct CmdResult {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    value: Option<u8>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    timeout: bool,
}
impl CmdResult {
    #[allow(unused_variables)]
    fn emit(&self, opts: &Opts) {
        #[cfg(feature = "json")]
        if opts.emit.json {
            match serde_json::to_string(self) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("{}", e),
            }
            return;
        }
        match self.value {
            Some(v) => println!("{}", v),
            None => println!("timeout"),
        }
    }
}
