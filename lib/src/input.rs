// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::handle::{impl_gpio, Pin};
use crate::{Direction, Edge, Error, PinId, Result, Sysfs};
use std::time::Duration;

/// A pin claimed as an input.
///
/// The pin is exported, its direction set to `in`, and its value file held
/// open for reading for the lifetime of the handle.
/// The pin is unexported when the handle is dropped.
///
/// # Examples
/// ```no_run
/// # fn example() -> gpiosysfs::Result<()> {
/// use gpiosysfs::{Gpio, InputPin};
///
/// let mut button = InputPin::new(23);
/// if button.is_ok() {
///     println!("button is {}", button.value()?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InputPin {
    pin: Pin,
}

impl InputPin {
    /// Claim a pin from the default sysfs root as an input.
    ///
    /// Check [`is_ok`] before use.
    ///
    /// [`is_ok`]: crate::Gpio::is_ok
    pub fn new(id: PinId) -> InputPin {
        Sysfs::default().input(id)
    }

    pub(crate) fn claim(sysfs: &Sysfs, id: PinId) -> (InputPin, Result<()>) {
        let mut input = InputPin {
            pin: Pin::new(sysfs, id),
        };
        let res = input.setup();
        (input, res)
    }

    fn setup(&mut self) -> Result<()> {
        self.pin.setup(Direction::In)?;
        // a freshly opened value file reports as ready until it is read
        self.pin.read_value()?;
        Ok(())
    }

    /// Read the level of the pin.
    pub fn value(&mut self) -> Result<bool> {
        self.pin.read_value()
    }

    /// Set the edges that will wake [`wait_value`].
    ///
    /// [`wait_value`]: InputPin::wait_value
    pub fn set_edge(&mut self, edge: Edge) -> Result<()> {
        self.pin.check_open()?;
        let path = self.pin.sysfs().edge_path(self.pin.id());
        self.pin.write_str(&path, edge.as_str())
    }

    /// Read the edges that will wake [`wait_value`].
    ///
    /// [`wait_value`]: InputPin::wait_value
    pub fn edge(&mut self) -> Result<Edge> {
        self.pin.check_open()?;
        let path = self.pin.sysfs().edge_path(self.pin.id());
        let s = self.pin.read_str(&path)?;
        let res = s
            .parse::<Edge>()
            .map_err(|_| Error::UnexpectedValue(path, s));
        self.pin.record(res)
    }

    /// Wait for an edge on the pin, then read its level.
    ///
    /// A zero timeout reads the level immediately, without waiting.
    ///
    /// Returns [`Error::Timeout`] if no edge occurs within the timeout.
    /// That is expected, and the wait may simply be repeated.
    ///
    /// No edge will ever be detected unless one has been selected with [`set_edge`].
    ///
    /// [`set_edge`]: InputPin::set_edge
    pub fn wait_value(&mut self, timeout: Duration) -> Result<bool> {
        if !timeout.is_zero() {
            self.pin.wait_edge(timeout)?;
        }
        self.pin.read_value()
    }
}

impl_gpio!(InputPin);
