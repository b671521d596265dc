// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`embedded_hal`] digital traits for the sysfs pins.
//!
//! Levels are logical, so an active low pin reads high when the line is
//! physically low.

use crate::{Error, InputPin, OutputPin};
use embedded_hal::digital::{ErrorKind, ErrorType, PinState};

impl embedded_hal::digital::Error for Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for InputPin {
    /// Errors returned by [`InputPin`].
    type Error = Error;
}

impl embedded_hal::digital::InputPin for InputPin {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.value()
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.value()?)
    }
}

impl ErrorType for OutputPin {
    /// Errors returned by [`OutputPin`].
    type Error = Error;
}

impl embedded_hal::digital::OutputPin for OutputPin {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(false)
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(true)
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.set_value(state == PinState::High)
    }
}

impl embedded_hal::digital::StatefulOutputPin for OutputPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        match self.level() {
            Some(level) => Ok(level),
            // nothing driven yet, so go with what the kernel has
            None => self.read_back(),
        }
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_set_high()?)
    }
}
