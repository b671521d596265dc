// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use gpiosysfs::{header, Edge, Gpio, PinId, Sysfs};
use std::path::PathBuf;
use std::time::Duration;

// common helper functions

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseDurationError {
    #[error("'{0}' unknown units - use 's', 'ms' or 'us'.")]
    Units(String),
    #[error("'{0}' must start with a digit")]
    NoDigits(String),
    #[error("'{0}' {1}")]
    ParseDigits(String, std::num::ParseIntError),
}

pub fn parse_duration(s: &str) -> std::result::Result<Duration, ParseDurationError> {
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    let t = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(0) => return Err(ParseDurationError::NoDigits(s.into())),
        Some(n) => {
            let (num, units) = s.split_at(n);
            let t = num
                .parse::<u64>()
                .map_err(|e| ParseDurationError::ParseDigits(num.into(), e))?;
            t * match units {
                "us" => 1000,
                "ms" => 1000000,
                "s" => 1000000000,
                _ => return Err(ParseDurationError::Units(s.into())),
            }
        }
        None => {
            s.parse::<u64>()
                .map_err(|e| ParseDurationError::ParseDigits(s.into(), e))?
                * 1000000
        }
    };
    Ok(Duration::from_nanos(t))
}

/// Label a failed pin operation with the pin and its decoded status.
pub fn pin_error<P: Gpio>(label: &str, pin: &P, e: gpiosysfs::Error) -> anyhow::Error {
    anyhow!(e).context(format!("{} gpio{}: {}", label, pin.id(), pin.status()))
}

/// Fail if the construction of a pin failed.
pub fn check_pin<P: Gpio>(label: &str, pin: &P) -> Result<()> {
    if pin.is_ok() {
        return Ok(());
    }
    Err(anyhow!("{} gpio{}: {}", label, pin.id(), pin.status()))
}

// common command line parser options

#[derive(Debug, Parser)]
/// Options to control the selection of pins.
pub struct PinOpts {
    #[arg(from_global)]
    pub root: PathBuf,

    #[arg(from_global)]
    pub header: bool,
}

impl PinOpts {
    pub fn sysfs(&self) -> Sysfs {
        Sysfs::new(&self.root)
    }

    /// Map a pin from the command line to its BCM id.
    pub fn resolve(&self, pin: u32) -> Result<PinId> {
        if !self.header {
            return Ok(pin);
        }
        u8::try_from(pin)
            .ok()
            .and_then(header::bcm)
            .ok_or_else(|| anyhow!("header pin {} is not a GPIO", pin))
    }
}

#[derive(Debug, Parser)]
pub struct EmitOpts {
    #[arg(from_global)]
    pub verbose: bool,

    /// Emit output in JSON format
    #[cfg(feature = "json")]
    #[arg(long, group = "emit")]
    pub json: bool,
}

pub fn emit_error(opts: &EmitOpts, e: &anyhow::Error) {
    let e_str = format_error(opts, e);
    #[cfg(feature = "json")]
    if opts.json {
        println!("{}", serde_json::json!({ "error": e_str }));
        return;
    }
    eprintln!("{e_str}");
}

pub fn format_error(opts: &EmitOpts, e: &anyhow::Error) -> String {
    if opts.verbose {
        format!("{e:#}")
    } else {
        format!("{e}")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EdgeFlags {
    None,
    Rising,
    Falling,
    Both,
}
impl From<EdgeFlags> for Edge {
    fn from(e: EdgeFlags) -> Self {
        match e {
            EdgeFlags::None => Edge::None,
            EdgeFlags::Rising => Edge::Rising,
            EdgeFlags::Falling => Edge::Falling,
            EdgeFlags::Both => Edge::Both,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use gpiosysfs_sim::Sim;

    pub fn pin_opts(sim: &Sim) -> PinOpts {
        PinOpts {
            root: sim.root().to_path_buf(),
            header: false,
        }
    }

    pub fn emit_opts() -> EmitOpts {
        EmitOpts {
            verbose: false,
            #[cfg(feature = "json")]
            json: false,
        }
    }

    #[test]
    fn duration() {
        assert_eq!(
            parse_duration("0").expect("duration should be valid"),
            Duration::ZERO
        );
        assert_eq!(
            parse_duration("1").expect("duration should be valid"),
            Duration::from_millis(1)
        );
        assert_eq!(
            parse_duration("2ms").expect("duration should be valid"),
            Duration::from_millis(2)
        );
        assert_eq!(
            parse_duration("3us").expect("duration should be valid"),
            Duration::from_micros(3)
        );
        assert_eq!(
            parse_duration("4s").expect("duration should be valid"),
            Duration::new(4, 0)
        );
        assert_eq!(
            parse_duration("5ns").expect_err("duration should be invalid"),
            ParseDurationError::Units("5ns".to_string())
        );
        assert_eq!(
            parse_duration("bad").expect_err("duration should be invalid"),
            ParseDurationError::NoDigits("bad".to_string())
        );
    }

    #[test]
    fn resolve() {
        let bcm = PinOpts {
            root: PathBuf::from(gpiosysfs::DEFAULT_ROOT),
            header: false,
        };
        assert_eq!(bcm.resolve(17).unwrap(), 17);
        assert_eq!(bcm.resolve(300).unwrap(), 300);

        let physical = PinOpts {
            root: PathBuf::from(gpiosysfs::DEFAULT_ROOT),
            header: true,
        };
        assert_eq!(physical.resolve(11).unwrap(), 17);
        assert_eq!(physical.resolve(3).unwrap(), 2);
        // ground
        assert!(physical.resolve(6).is_err());
        assert!(physical.resolve(300).is_err());
    }

    #[test]
    fn failure_label() {
        let s = gpiosysfs_sim::Simpleton::new(2);
        let opts = pin_opts(s.sim());
        let mut pin = opts.sysfs().input(7);
        let e = check_pin("input", &pin).unwrap_err();
        assert_eq!(e.to_string(), "input gpio7: file open error");

        let e = pin.value().unwrap_err();
        let e = pin_error("input", &pin, e);
        assert_eq!(e.to_string(), "input gpio7: file open error");
        assert_eq!(
            format_error(&emit_opts(), &e),
            "input gpio7: file open error"
        );
        let verbose = EmitOpts {
            verbose: true,
            ..emit_opts()
        };
        assert_eq!(
            format_error(&verbose, &e),
            "input gpio7: file open error: gpio7 is not open."
        );
    }

    #[test]
    fn edge_flags() {
        assert_eq!(Edge::from(EdgeFlags::None), Edge::None);
        assert_eq!(Edge::from(EdgeFlags::Rising), Edge::Rising);
        assert_eq!(Edge::from(EdgeFlags::Falling), Edge::Falling);
        assert_eq!(Edge::from(EdgeFlags::Both), Edge::Both);
    }
}
