// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EdgeFlags, EmitOpts, PinOpts};
use anyhow::Result;
use clap::Parser;
use gpiosysfs::Gpio;
use log::debug;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(alias("t"))]
pub struct Opts {
    /// The pin to watch for edges
    #[arg(value_name = "input")]
    input: u32,

    /// The pin to toggle
    #[arg(value_name = "output")]
    output: u32,

    #[command(flatten)]
    pin_opts: PinOpts,

    /// The edges that toggle the output
    #[arg(short, long, value_enum, default_value = "rising")]
    edge: EdgeFlags,

    /// The maximum time to wait for each edge
    ///
    /// Waits that time out are retried.
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(short, long, value_name = "period", default_value = "1s", value_parser = common::parse_duration)]
    timeout: Duration,

    /// The number of toggles to perform before exiting
    ///
    /// If not specified then toggling continues until the process is killed.
    #[arg(short = 'n', long, value_name = "count")]
    count: Option<u64>,

    /// The number of consecutive timeouts tolerated before exiting
    ///
    /// If not specified then timeouts are retried indefinitely.
    #[arg(long, value_name = "count")]
    max_timeouts: Option<u64>,

    #[command(flatten)]
    emit: EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    match do_cmd(opts) {
        Ok(toggles) => {
            debug!("toggled {} times", toggles);
            true
        }
        Err(e) => {
            emit_error(&opts.emit, &e);
            false
        }
    }
}

fn do_cmd(opts: &Opts) -> Result<u64> {
    let sysfs = opts.pin_opts.sysfs();
    let mut input = sysfs.input(opts.pin_opts.resolve(opts.input)?);
    common::check_pin("input", &input)?;
    let mut output = sysfs.output(opts.pin_opts.resolve(opts.output)?);
    common::check_pin("output", &output)?;
    input
        .set_edge(opts.edge.into())
        .map_err(|e| common::pin_error("input", &input, e))?;

    let mut level = false;
    output
        .set_value(level)
        .map_err(|e| common::pin_error("output", &output, e))?;

    let mut toggles = 0;
    let mut timeouts = 0;
    while opts.count.map_or(true, |count| toggles < count) {
        match input.wait_value(opts.timeout) {
            Ok(_) => {
                timeouts = 0;
                level = !level;
                output
                    .set_value(level)
                    .map_err(|e| common::pin_error("output", &output, e))?;
                toggles += 1;
            }
            Err(e) if e.is_timeout() => {
                timeouts += 1;
                if opts.max_timeouts.is_some_and(|max| timeouts > max) {
                    return Err(common::pin_error("input", &input, e));
                }
                debug!("gpio{} timed out waiting for edge", input.id());
            }
            Err(e) => return Err(common::pin_error("input", &input, e)),
        }
    }
    Ok(toggles)
}
