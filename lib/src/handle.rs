// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::attr;
use crate::registry::{self, Claim};
use crate::{Direction, Error, PinId, Resistor, Result, Status, Sysfs};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The operations common to input and output pins.
pub trait Gpio {
    /// The id of the pin.
    fn id(&self) -> PinId;

    /// The status of the most recent operation on the pin.
    fn status(&self) -> Status;

    /// Reset the status to [`Status::Ok`].
    ///
    /// Always returns true.
    fn clear_status(&mut self) -> bool;

    /// Returns true if the most recent operation on the pin succeeded.
    ///
    /// Check this after constructing a pin, as construction does not fail outright.
    fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    /// Read the direction of the pin from its `direction` attribute.
    fn direction(&mut self) -> Result<Direction>;

    /// Returns true if the pin is active low, i.e. values are inverted
    /// relative to the physical level.
    fn active_low(&mut self) -> Result<bool>;

    /// Set the polarity of the pin.
    ///
    /// When active low, values read and written are inverted by the kernel.
    fn set_active_low(&mut self, active_low: bool) -> Result<()>;

    /// The pull resistor mode in effect.
    ///
    /// Always [`Resistor::None`] as sysfs provides no pull control.
    fn resistor(&self) -> Resistor {
        Resistor::None
    }

    /// Request a pull resistor mode.
    ///
    /// Accepted and ignored, as sysfs provides no pull control.
    /// Always returns true.
    fn set_resistor(&mut self, _resistor: Resistor) -> bool {
        true
    }
}

/// The core common to input and output pins.
///
/// Owns the claim on the pin, from export through to unexport, and the open value file.
#[derive(Debug)]
pub(crate) struct Pin {
    sysfs: Sysfs,
    id: PinId,
    status: Status,
    value_path: PathBuf,
    value: Option<File>,
    claim: Option<Claim>,
}

impl Pin {
    pub(crate) fn new(sysfs: &Sysfs, id: PinId) -> Pin {
        Pin {
            sysfs: sysfs.clone(),
            id,
            status: Status::Ok,
            value_path: sysfs.value_path(id),
            value: None,
            claim: None,
        }
    }

    /// Export the pin, set its direction and open its value file.
    ///
    /// On failure the status records the cause and the pin is left without a value file.
    pub(crate) fn setup(&mut self, direction: Direction) -> Result<()> {
        let claim = registry::claim(self.sysfs.root(), self.id);
        self.claim = Some(self.record(claim)?);

        let export = self.sysfs.export_path();
        self.write_str(&export, &self.id.to_string())?;
        debug!("exported gpio{}", self.id);

        let path = self.sysfs.direction_path(self.id);
        self.write_str(&path, direction.as_str())?;

        let mut options = OpenOptions::new();
        match direction {
            Direction::In => options.read(true),
            Direction::Out => options.write(true),
        };
        let f = options
            .open(&self.value_path)
            .map_err(|e| Error::Open(self.value_path.clone(), e));
        self.value = Some(self.record(f)?);
        debug!("opened gpio{} as {}", self.id, direction);
        Ok(())
    }

    pub(crate) fn id(&self) -> PinId {
        self.id
    }

    pub(crate) fn sysfs(&self) -> &Sysfs {
        &self.sysfs
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn clear_status(&mut self) -> bool {
        self.status = Status::Ok;
        true
    }

    // overwrite the status with the outcome of an operation
    pub(crate) fn record<T>(&mut self, res: Result<T>) -> Result<T> {
        self.status = Status::from(&res);
        res
    }

    pub(crate) fn write_str(&mut self, path: &Path, text: &str) -> Result<()> {
        let res = attr::write_str(path, text);
        self.record(res)
    }

    pub(crate) fn write_bit(&mut self, path: &Path, bit: bool) -> Result<()> {
        let res = attr::write_bit(path, bit);
        self.record(res)
    }

    pub(crate) fn read_str(&mut self, path: &Path) -> Result<String> {
        let res = attr::read_str(path);
        self.record(res)
    }

    pub(crate) fn read_bit(&mut self, path: &Path) -> Result<bool> {
        let res = attr::read_bit(path);
        self.record(res)
    }

    /// Fail, recording the failure, unless setup completed.
    ///
    /// Guards every operation on the pin, as a pin that failed setup may
    /// share its attributes with a pin owned by someone else.
    pub(crate) fn check_open(&mut self) -> Result<()> {
        let res = match self.value {
            Some(_) => Ok(()),
            None => Err(Error::NotOpen(self.id)),
        };
        self.record(res)
    }

    pub(crate) fn direction(&mut self) -> Result<Direction> {
        self.check_open()?;
        let path = self.sysfs.direction_path(self.id);
        let s = self.read_str(&path)?;
        let res = s
            .parse::<Direction>()
            .map_err(|_| Error::UnexpectedValue(path, s));
        self.record(res)
    }

    pub(crate) fn active_low(&mut self) -> Result<bool> {
        self.check_open()?;
        let path = self.sysfs.active_low_path(self.id);
        self.read_bit(&path)
    }

    pub(crate) fn set_active_low(&mut self, active_low: bool) -> Result<()> {
        self.check_open()?;
        let path = self.sysfs.active_low_path(self.id);
        self.write_bit(&path, active_low)
    }

    /// Read the level from a fresh open of the value file, rather than the held one.
    pub(crate) fn read_back(&mut self) -> Result<bool> {
        self.check_open()?;
        let path = self.value_path.clone();
        self.read_bit(&path)
    }

    fn value_file(&self) -> Result<&File> {
        self.value.as_ref().ok_or(Error::NotOpen(self.id))
    }

    pub(crate) fn read_value(&mut self) -> Result<bool> {
        let res = self
            .value_file()
            .and_then(|f| attr::read_value(f, &self.value_path));
        self.record(res)
    }

    pub(crate) fn write_value(&mut self, bit: bool) -> Result<()> {
        let res = self
            .value_file()
            .and_then(|f| attr::write_value(f, &self.value_path, bit));
        self.record(res)
    }

    /// Block until the value file signals an edge, or the timeout expires.
    pub(crate) fn wait_edge(&mut self, timeout: Duration) -> Result<()> {
        let res = self.value_file().and_then(|f| {
            match attr::wait_priority(f, timeout) {
                Ok(true) => Ok(()),
                Ok(false) => Err(Error::Timeout(self.value_path.clone())),
                Err(e) => Err(Error::Wait(self.value_path.clone(), e)),
            }
        });
        self.record(res)
    }
}

impl Drop for Pin {
    fn drop(&mut self) {
        // the value file must be closed before the pin is unexported
        drop(self.value.take());
        if let Some(claim) = self.claim.take() {
            match attr::write_str(&self.sysfs.unexport_path(), &self.id.to_string()) {
                Ok(()) => debug!("unexported gpio{}", self.id),
                Err(e) => warn!("failed to unexport gpio{}: {}", self.id, e),
            }
            drop(claim);
        }
    }
}

// Implements Gpio for a pin type with a `pin` field holding the core.
macro_rules! impl_gpio {
    ($ty:ty) => {
        impl $crate::Gpio for $ty {
            #[inline]
            fn id(&self) -> $crate::PinId {
                self.pin.id()
            }

            #[inline]
            fn status(&self) -> $crate::Status {
                self.pin.status()
            }

            #[inline]
            fn clear_status(&mut self) -> bool {
                self.pin.clear_status()
            }

            fn direction(&mut self) -> $crate::Result<$crate::Direction> {
                self.pin.direction()
            }

            fn active_low(&mut self) -> $crate::Result<bool> {
                self.pin.active_low()
            }

            fn set_active_low(&mut self, active_low: bool) -> $crate::Result<()> {
                self.pin.set_active_low(active_low)
            }
        }
    };
}
pub(crate) use impl_gpio;
