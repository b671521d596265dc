// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library for accessing GPIO pins on Linux platforms
//! using the sysfs GPIO interface in `/sys/class/gpio`.
//!
//! A pin is claimed from the kernel by constructing an [`InputPin`] or an
//! [`OutputPin`], and released again when the pin is dropped.
//!
//! Each pin handle records the [`Status`] of the most recent operation performed
//! on it, which is available via the [`Gpio`] trait along with the other operations
//! common to both kinds of pin.
//!
//! Reading an input pin:
//! ```no_run
//! # fn main() -> gpiosysfs::Result<()> {
//! use gpiosysfs::{Gpio, InputPin};
//!
//! let mut pin = InputPin::new(17);
//! if !pin.is_ok() {
//!     eprintln!("gpio17: {}", pin.status());
//!     return Ok(());
//! }
//! let level = pin.value()?;
//! # Ok(())
//! # }
//! ```
//!
//! Waiting for an edge on an input pin:
//! ```no_run
//! # fn main() -> gpiosysfs::Result<()> {
//! use gpiosysfs::{Edge, Sysfs};
//! use std::time::Duration;
//!
//! let mut pin = Sysfs::default().request_input(17)?;
//! pin.set_edge(Edge::Both)?;
//! match pin.wait_value(Duration::from_secs(1)) {
//!     Ok(level) => println!("gpio17 changed to {}", level),
//!     Err(e) if e.is_timeout() => println!("gpio17 unchanged"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Driving an output pin:
//! ```no_run
//! # fn main() -> gpiosysfs::Result<()> {
//! use gpiosysfs::{header, Sysfs};
//!
//! let mut led = Sysfs::default().request_output(header::PIN_11)?;
//! led.set_value(true)?;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::PathBuf;

mod attr;

mod handle;
pub use handle::Gpio;

/// The mapping between the physical pins of the 40-pin connector and the
/// BCM pin ids used by the kernel.
pub mod header;

mod input;
pub use input::InputPin;

mod output;
pub use output::OutputPin;

mod pin;
pub use pin::{Direction, Edge, PinId, Resistor};

mod registry;
pub use registry::is_claimed;

mod status;
pub use status::Status;

mod sysfs;
pub use sysfs::{Sysfs, DEFAULT_ROOT, ROOT_ENV};

#[cfg(feature = "embedded_hal")]
mod hal;

/// Errors returned by [`gpiosysfs`] functions.
///
/// Every error corresponds to a [`Status`], which is recorded on the pin
/// handle that performed the failed operation.
///
/// [`gpiosysfs`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An internal helper was passed an empty argument.
    #[error("{0} must not be empty.")]
    BadArgument(&'static str),

    /// An attribute file could not be opened.
    #[error("unable to open \"{0}\": {1}")]
    Open(PathBuf, #[source] io::Error),

    /// An attribute file could not be fully written.
    #[error("unable to write \"{0}\": {1}")]
    Write(PathBuf, #[source] io::Error),

    /// An attribute file could not be read.
    #[error("unable to read \"{0}\": {1}")]
    Read(PathBuf, #[source] io::Error),

    /// The value file could not be rewound.
    #[error("unable to seek \"{0}\": {1}")]
    Seek(PathBuf, #[source] io::Error),

    /// Waiting for an edge on the value file failed.
    #[error("unable to wait on \"{0}\": {1}")]
    Wait(PathBuf, #[source] io::Error),

    /// No edge occurred before the wait timed out.
    #[error("timed out waiting for an edge on \"{0}\".")]
    Timeout(PathBuf),

    /// An attribute file contained a value the library does not recognise.
    #[error("\"{0}\" contains unexpected value {1:?}.")]
    UnexpectedValue(PathBuf, String),

    /// The pin handle has no open value file, as its construction failed.
    #[error("gpio{0} is not open.")]
    NotOpen(PinId),

    /// The pin is already held by another handle in this process.
    #[error("gpio{0} is already claimed.")]
    AlreadyClaimed(PinId),
}

impl Error {
    /// The status corresponding to the error.
    pub fn status(&self) -> Status {
        Status::from(self)
    }

    /// Returns true if the error is a timeout waiting for an edge.
    ///
    /// Timeouts are expected, and the operation may be retried.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

/// The result for [`gpiosysfs`] functions.
///
/// [`gpiosysfs`]: crate
pub type Result<T> = std::result::Result<T, Error>;
