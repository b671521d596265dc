// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for driving GPIO pins via sysfs.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod common;
mod copy;
mod get;
mod set;
mod toggle;
mod wait;

fn main() -> ExitCode {
    env_logger::init();
    match Opts::try_parse() {
        Ok(opt) => {
            log::debug!("using sysfs root {}", opt.root.display());
            let res = match opt.cmd {
                Command::Copy(cfg) => copy::cmd(&cfg),
                Command::Get(cfg) => get::cmd(&cfg),
                Command::Set(cfg) => set::cmd(&cfg),
                Command::Toggle(cfg) => toggle::cmd(&cfg),
                Command::Wait(cfg) => wait::cmd(&cfg),
            };
            return if res {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

#[derive(Parser)]
#[command(
    name = "gpiosysfs",
    about = "A utility to drive GPIO pins on Linux using the sysfs GPIO interface.",
    version,
    propagate_version = true
)]
struct Opts {
    /// Provide more detailed error messages.
    #[arg(short = 'v', long, global = true, display_order = 800)]
    pub verbose: bool,

    /// The sysfs GPIO class directory.
    #[arg(
        long,
        value_name = "path",
        global = true,
        env = "GPIOSYSFS_ROOT",
        default_value = "/sys/class/gpio",
        display_order = 801
    )]
    pub root: PathBuf,

    /// Identify pins by their physical pin number on the 40-pin header,
    /// rather than by their BCM GPIO number.
    #[arg(long, global = true, display_order = 802)]
    pub header: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
enum Command {
    /// Copy the level of an input pin to an output pin, repeatedly.
    Copy(copy::Opts),

    /// Read the levels of input pins.
    Get(get::Opts),

    /// Drive the level of an output pin.
    Set(set::Opts),

    /// Toggle an output pin on each edge detected on an input pin.
    Toggle(toggle::Opts),

    /// Wait for an edge on an input pin.
    Wait(wait::Opts),
}
