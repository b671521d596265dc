// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{InputPin, OutputPin, PinId, Result};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// The location of the GPIO class directory on a standard Linux system.
pub const DEFAULT_ROOT: &str = "/sys/class/gpio";

/// The environment variable that overrides the GPIO class directory for [`Sysfs::from_env`].
pub const ROOT_ENV: &str = "GPIOSYSFS_ROOT";

/// A sysfs GPIO class directory, from which pins are claimed.
///
/// The directory contains the `export` and `unexport` control files, and a
/// `gpio<N>` directory of attribute files for each exported pin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sysfs {
    root: PathBuf,
}

impl Default for Sysfs {
    fn default() -> Self {
        Sysfs {
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl Sysfs {
    /// Use the GPIO class directory at the given path.
    pub fn new<P: Into<PathBuf>>(root: P) -> Sysfs {
        Sysfs { root: root.into() }
    }

    /// Use the GPIO class directory named by the `GPIOSYSFS_ROOT` environment
    /// variable, else the default.
    pub fn from_env() -> Sysfs {
        match env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => Sysfs::new(root),
            _ => Sysfs::default(),
        }
    }

    /// The path of the GPIO class directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path of the control file used to claim pins.
    pub fn export_path(&self) -> PathBuf {
        self.root.join("export")
    }

    /// The path of the control file used to release pins.
    pub fn unexport_path(&self) -> PathBuf {
        self.root.join("unexport")
    }

    /// The path of the attribute directory of an exported pin.
    pub fn pin_dir(&self, pin: PinId) -> PathBuf {
        self.root.join(format!("gpio{}", pin))
    }

    /// The path of the `direction` attribute of a pin.
    pub fn direction_path(&self, pin: PinId) -> PathBuf {
        self.pin_dir(pin).join("direction")
    }

    /// The path of the `value` attribute of a pin.
    pub fn value_path(&self, pin: PinId) -> PathBuf {
        self.pin_dir(pin).join("value")
    }

    /// The path of the `edge` attribute of a pin.
    pub fn edge_path(&self, pin: PinId) -> PathBuf {
        self.pin_dir(pin).join("edge")
    }

    /// The path of the `active_low` attribute of a pin.
    pub fn active_low_path(&self, pin: PinId) -> PathBuf {
        self.pin_dir(pin).join("active_low")
    }

    /// Check if the pin is currently exported, by this or any other process.
    pub fn is_exported(&self, pin: PinId) -> bool {
        self.pin_dir(pin).is_dir()
    }

    /// Claim a pin as an input.
    ///
    /// This never fails outright.  Check [`is_ok`] on the returned pin before use,
    /// and [`status`] for the cause if it is not.
    ///
    /// [`is_ok`]: crate::Gpio::is_ok
    /// [`status`]: crate::Gpio::status
    pub fn input(&self, pin: PinId) -> InputPin {
        let (input, res) = InputPin::claim(self, pin);
        if let Err(e) = res {
            debug!("gpio{} input setup failed: {}", pin, e);
        }
        input
    }

    /// Claim a pin as an output.
    ///
    /// This never fails outright.  Check [`is_ok`] on the returned pin before use,
    /// and [`status`] for the cause if it is not.
    ///
    /// [`is_ok`]: crate::Gpio::is_ok
    /// [`status`]: crate::Gpio::status
    pub fn output(&self, pin: PinId) -> OutputPin {
        let (output, res) = OutputPin::claim(self, pin);
        if let Err(e) = res {
            debug!("gpio{} output setup failed: {}", pin, e);
        }
        output
    }

    /// Claim a pin as an input, returning the cause if that fails.
    ///
    /// # Examples
    /// ```no_run
    /// # fn example() -> gpiosysfs::Result<()> {
    /// let sysfs = gpiosysfs::Sysfs::default();
    /// let mut pin = sysfs.request_input(4)?;
    /// let level = pin.value()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request_input(&self, pin: PinId) -> Result<InputPin> {
        let (input, res) = InputPin::claim(self, pin);
        res.map(|_| input)
    }

    /// Claim a pin as an output, returning the cause if that fails.
    ///
    /// # Examples
    /// ```no_run
    /// # fn example() -> gpiosysfs::Result<()> {
    /// let sysfs = gpiosysfs::Sysfs::new("/sys/class/gpio");
    /// let mut pin = sysfs.request_output(22)?;
    /// pin.set_value(true)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request_output(&self, pin: PinId) -> Result<OutputPin> {
        let (output, res) = OutputPin::claim(self, pin);
        res.map(|_| output)
    }
}
