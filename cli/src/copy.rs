// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::common::{self, emit_error, EmitOpts, PinOpts};
use anyhow::Result;
use clap::Parser;
use gpiosysfs::Gpio;
use log::debug;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(alias("c"))]
pub struct Opts {
    /// The pin to read
    #[arg(value_name = "input")]
    input: u32,

    /// The pin to drive
    #[arg(value_name = "output")]
    output: u32,

    #[command(flatten)]
    pin_opts: PinOpts,

    /// The time to sleep between copies
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(short, long, value_name = "period", default_value = "10ms", value_parser = common::parse_duration)]
    period: Duration,

    /// The number of copies to make before exiting
    ///
    /// If not specified then copying continues until the process is killed.
    #[arg(short = 'n', long, value_name = "count")]
    count: Option<u64>,

    #[command(flatten)]
    emit: EmitOpts,
}

pub fn cmd(opts: &Opts) -> bool {
    match do_cmd(opts) {
        Ok(stats) => {
            if stats.copies > 0 {
                println!(
                    "copied {} values, mean loop time {:?}",
                    stats.copies,
                    stats.mean()
                );
            }
            true
        }
        Err(e) => {
            emit_error(&opts.emit, &e);
            false
        }
    }
}

#[derive(Debug, Default)]
struct Stats {
    copies: u64,
    elapsed: Duration,
}

impl Stats {
    fn mean(&self) -> Duration {
        match u32::try_from(self.copies) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.copies as f64),
        }
    }
}

fn do_cmd(opts: &Opts) -> Result<Stats> {
    let sysfs = opts.pin_opts.sysfs();
    let mut input = sysfs.input(opts.pin_opts.resolve(opts.input)?);
    common::check_pin("input", &input)?;
    let mut output = sysfs.output(opts.pin_opts.resolve(opts.output)?);
    common::check_pin("output", &output)?;
    debug!(
        "copying gpio{} to gpio{} every {:?}",
        input.id(),
        output.id(),
        opts.period
    );

    let mut stats = Stats::default();
    let start = Instant::now();
    while opts.count.map_or(true, |count| stats.copies < count) {
        let value = input
            .value()
            .map_err(|e| common::pin_error("input", &input, e))?;
        output
            .set_value(value)
            .map_err(|e| common::pin_error("output", &output, e))?;
        stats.copies += 1;
        thread::sleep(opts.period);
    }
    stats.elapsed = start.elapsed();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::{emit_opts, pin_opts};
    use gpiosysfs_sim::{Level, Simpleton};

    fn opts(s: &Simpleton, input: u32, output: u32) -> Opts {
        Opts {
            input,
            output,
            pin_opts: pin_opts(s.sim()),
            period: Duration::from_millis(1),
            count: Some(3),
            emit: emit_opts(),
        }
    }

    #[test]
    fn copy() {
        let s = Simpleton::new(4);
        s.pullup(0).unwrap();
        let stats = do_cmd(&opts(&s, 0, 3)).unwrap();
        assert_eq!(stats.copies, 3);
        assert!(stats.mean() >= Duration::from_millis(1));
        assert_eq!(s.get_level(3).unwrap(), Level::High);
        assert_eq!(s.get_level(0).unwrap(), Level::High);
    }

    #[test]
    fn copy_header() {
        let s = gpiosysfs_sim::builder().with_pins([17, 27]).live().unwrap();
        s.pullup(17).unwrap();
        let mut o = Opts {
            // physical 11 and 13
            input: 11,
            output: 13,
            pin_opts: pin_opts(&s),
            period: Duration::ZERO,
            count: Some(1),
            emit: emit_opts(),
        };
        o.pin_opts.header = true;
        let stats = do_cmd(&o).unwrap();
        assert_eq!(stats.copies, 1);
        assert_eq!(s.get_level(27).unwrap(), Level::High);
        assert_eq!(s.get_direction(27).unwrap(), "out");
    }

    #[test]
    fn copy_bad_output() {
        let s = Simpleton::new(2);
        let e = do_cmd(&opts(&s, 0, 6)).unwrap_err();
        assert_eq!(e.to_string(), "output gpio6: file open error");
    }

    #[test]
    fn stats_mean() {
        let stats = Stats {
            copies: 4,
            elapsed: Duration::from_millis(10),
        };
        assert_eq!(stats.mean(), Duration::from_micros(2500));
        assert_eq!(Stats::default().mean(), Duration::ZERO);
    }
}
