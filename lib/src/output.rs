// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::handle::{impl_gpio, Pin};
use crate::{Direction, PinId, Result, Sysfs};

/// A pin claimed as an output.
///
/// The pin is exported, its direction set to `out`, and its value file held
/// open for writing for the lifetime of the handle.
/// The pin is unexported when the handle is dropped.
///
/// # Examples
/// ```no_run
/// # fn example() -> gpiosysfs::Result<()> {
/// use gpiosysfs::Sysfs;
///
/// let mut led = Sysfs::default().request_output(22)?;
/// led.set_value(true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OutputPin {
    pin: Pin,
    // the last level successfully written
    level: Option<bool>,
}

impl OutputPin {
    /// Claim a pin from the default sysfs root as an output.
    ///
    /// Check [`is_ok`] before use.
    ///
    /// [`is_ok`]: crate::Gpio::is_ok
    pub fn new(id: PinId) -> OutputPin {
        Sysfs::default().output(id)
    }

    pub(crate) fn claim(sysfs: &Sysfs, id: PinId) -> (OutputPin, Result<()>) {
        let mut output = OutputPin {
            pin: Pin::new(sysfs, id),
            level: None,
        };
        let res = output.pin.setup(Direction::Out);
        (output, res)
    }

    /// Drive the pin to a level.
    pub fn set_value(&mut self, value: bool) -> Result<()> {
        self.pin.write_value(value)?;
        self.level = Some(value);
        Ok(())
    }

    /// The level most recently driven by [`set_value`], if any.
    ///
    /// [`set_value`]: OutputPin::set_value
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    /// Read the level of the pin back from its value attribute.
    ///
    /// Whether this reflects the physical level or the requested one depends
    /// on the GPIO driver.
    pub fn read_back(&mut self) -> Result<bool> {
        self.pin.read_back()
    }
}

impl_gpio!(OutputPin);
