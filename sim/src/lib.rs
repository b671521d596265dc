// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A library for creating fake sysfs GPIO trees for testing code that
//! drives GPIO lines via `/sys/class/gpio`.
//!
//! Simulators can be built using the [`Builder`].
//!
//! For simple tests that only require a contiguous block of pins the
//! [`Simpleton`] provides a simplified interface.
//!
//! The tree is created in a temporary directory and removed when the
//! simulator is dropped, so no root permissions or kernel support are
//! required.  The simulator plays the part of the kernel:
//!  - each simulated pin has a pre-created `gpio<N>` directory containing
//!    `direction`, `value`, `edge` and `active_low` attribute files,
//!  - the `export` and `unexport` control files record the last pin id
//!    written to them,
//!  - pin levels can be pulled, to simulate external drive, and read back, to
//!    check what has been driven.
//!
//! Plain files never signal priority data, so a wait for an edge on a
//! simulated pin always runs to its timeout.
//!
//! [`Builder`]: fn.builder.html
//! [`Simpleton`]: struct.Simpleton.html

use nohash_hasher::IntSet;
use std::env;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process;

#[macro_use]
extern crate global_counter;

/// The identifier of a pin, as written to the export control file.
pub type PinId = u32;

/// A live simulated sysfs GPIO tree.
#[derive(Debug, Eq, PartialEq)]
pub struct Sim {
    /// The name of the simulator, used as the name of its directory.
    name: String,

    /// The pins being simulated.
    pins: IntSet<PinId>,

    /// Path to the simulated GPIO class directory.
    dir: PathBuf,
}

impl Sim {
    /// The name of the simulator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path to use as the sysfs GPIO root.
    pub fn root(&self) -> &Path {
        &self.dir
    }

    /// The pins being simulated, in ascending order.
    pub fn pins(&self) -> Vec<PinId> {
        let mut pins: Vec<PinId> = self.pins.iter().copied().collect();
        pins.sort_unstable();
        pins
    }

    /// The path to the attribute directory of a pin.
    pub fn pin_dir(&self, pin: PinId) -> PathBuf {
        self.dir.join(format!("gpio{}", pin))
    }

    fn live(&mut self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        write_attr(&self.dir, "export", "")?;
        write_attr(&self.dir, "unexport", "")?;
        for pin in self.pins.iter() {
            let pin_dir = self.dir.join(format!("gpio{}", pin));
            fs::create_dir(&pin_dir)?;
            write_attr(&pin_dir, "direction", "in\n")?;
            write_attr(&pin_dir, "value", "0\n")?;
            write_attr(&pin_dir, "edge", "none\n")?;
            write_attr(&pin_dir, "active_low", "0\n")?;
        }
        Ok(())
    }

    fn cleanup(&mut self) {
        if !self.dir.exists() {
            return;
        }
        _ = fs::remove_dir_all(&self.dir);
    }

    fn check_pin(&self, pin: PinId) -> Result<()> {
        if !self.pins.contains(&pin) {
            return Err(Error::UnknownPin(pin));
        }
        Ok(())
    }

    /// Pull a pin to simulate the pin being externally driven.
    pub fn set_pull(&self, pin: PinId, pull: Level) -> Result<()> {
        self.check_pin(pin)?;
        let value = match pull {
            Level::Low => "0\n",
            Level::High => "1\n",
        };
        write_attr(&self.pin_dir(pin), "value", value)
    }

    /// Pull a pin up to simulate the pin being externally driven high.
    pub fn pullup(&self, pin: PinId) -> Result<()> {
        self.set_pull(pin, Level::High)
    }

    /// Pull a pin down to simulate the pin being externally driven low.
    pub fn pulldown(&self, pin: PinId) -> Result<()> {
        self.set_pull(pin, Level::Low)
    }

    /// Toggle the level of a pin.
    pub fn toggle(&self, pin: PinId) -> Result<Level> {
        let value = match self.get_level(pin)? {
            Level::High => Level::Low,
            Level::Low => Level::High,
        };
        self.set_pull(pin, value)?;
        Ok(value)
    }

    /// Get the current level of a pin.
    ///
    /// Only the first byte of the value file is significant, as that is all
    /// a single byte write updates.
    pub fn get_level(&self, pin: PinId) -> Result<Level> {
        self.check_pin(pin)?;
        let val = read_attr(&self.pin_dir(pin), "value")?;
        match val.chars().next() {
            Some('0') => Ok(Level::Low),
            Some('1') => Ok(Level::High),
            _ => Err(Error::UnexpectedValue(val)),
        }
    }

    /// Get the content of the direction attribute of a pin.
    pub fn get_direction(&self, pin: PinId) -> Result<String> {
        self.check_pin(pin)?;
        read_attr(&self.pin_dir(pin), "direction")
    }

    /// Get the content of the edge attribute of a pin.
    pub fn get_edge(&self, pin: PinId) -> Result<String> {
        self.check_pin(pin)?;
        read_attr(&self.pin_dir(pin), "edge")
    }

    /// Overwrite the edge attribute of a pin.
    ///
    /// Allows the content to be something a kernel would never report.
    pub fn set_edge(&self, pin: PinId, edge: &str) -> Result<()> {
        self.check_pin(pin)?;
        write_attr(&self.pin_dir(pin), "edge", edge)
    }

    /// Get the content of the active_low attribute of a pin.
    pub fn get_active_low(&self, pin: PinId) -> Result<String> {
        self.check_pin(pin)?;
        read_attr(&self.pin_dir(pin), "active_low")
    }

    /// The pin id most recently written to the export control file.
    pub fn last_exported(&self) -> Result<Option<PinId>> {
        last_written(&self.dir, "export")
    }

    /// The pin id most recently written to the unexport control file.
    pub fn last_unexported(&self) -> Result<Option<PinId>> {
        last_written(&self.dir, "unexport")
    }

    /// Wire the value of one pin to another.
    ///
    /// The value file of `to` is replaced with a link to the value file of
    /// `from`, so levels written to either pin are seen on both.
    pub fn wire(&self, from: PinId, to: PinId) -> Result<()> {
        self.check_pin(from)?;
        self.check_pin(to)?;
        let target = self.pin_dir(from).join("value");
        let link = self.pin_dir(to).join("value");
        fs::remove_file(&link)?;
        symlink(target, link)?;
        Ok(())
    }

    /// Make the export control file unwritable, as if the kernel refused
    /// every export, e.g. as the pins are already exported elsewhere.
    ///
    /// The attribute directories of the pins are left in place.
    pub fn refuse_export(&self) -> Result<()> {
        let export = self.dir.join("export");
        fs::remove_file(&export)?;
        fs::create_dir(&export)?;
        Ok(())
    }

    /// Remove the attribute directory of a pin, as if the pin does not exist.
    pub fn remove(&mut self, pin: PinId) -> Result<()> {
        self.check_pin(pin)?;
        fs::remove_dir_all(self.pin_dir(pin))?;
        self.pins.remove(&pin);
        Ok(())
    }
}

impl Drop for Sim {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Start building a GPIO simulator.
pub fn builder() -> Builder {
    Builder::default()
}

/// Build a basic sim of a contiguous block of pins and take it live.
///
/// This is sufficient for tests that do not require particular pin ids.
pub fn simpleton(num_pins: u32) -> Simpleton {
    Simpleton::new(num_pins)
}

/// A basic sim with pins `0..num_pins`.
pub struct Simpleton(Sim);

impl Simpleton {
    /// Build and take live a sim with pins `0..num_pins`.
    ///
    /// # Panics
    ///
    /// If the sim cannot be taken live.
    pub fn new(num_pins: u32) -> Simpleton {
        Simpleton(builder().with_pins(0..num_pins).live().unwrap())
    }

    /// Return the sim underlying the Simpleton.
    pub fn sim(&self) -> &Sim {
        &self.0
    }

    /// The path to use as the sysfs GPIO root.
    pub fn root(&self) -> &Path {
        self.0.root()
    }

    /// Pull a pin up to simulate the pin being externally driven high.
    pub fn pullup(&self, pin: PinId) -> Result<()> {
        self.0.pullup(pin)
    }

    /// Pull a pin down to simulate the pin being externally driven low.
    pub fn pulldown(&self, pin: PinId) -> Result<()> {
        self.0.pulldown(pin)
    }

    /// Toggle the level of a pin.
    pub fn toggle(&self, pin: PinId) -> Result<Level> {
        self.0.toggle(pin)
    }

    /// Get the current level of a pin.
    pub fn get_level(&self, pin: PinId) -> Result<Level> {
        self.0.get_level(pin)
    }
}

/// A builder of simulators.
///
/// Collects the configuration for the simulator, and then creates
/// the simulator when taken live.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Builder {
    /// The name for the simulator.
    ///
    /// If None when [`live`] is called then a unique name is generated.
    ///
    /// [`live`]: Builder::live
    pub name: Option<String>,

    /// The pins to be simulated.
    pub pins: IntSet<PinId>,
}

impl Builder {
    /// Add a pin to the configuration.
    pub fn with_pin(&mut self, pin: PinId) -> &mut Self {
        self.pins.insert(pin);
        self
    }

    /// Add a set of pins to the configuration.
    pub fn with_pins<I: IntoIterator<Item = PinId>>(&mut self, pins: I) -> &mut Self {
        self.pins.extend(pins);
        self
    }

    /// A convenience function to specify the name for the simulator.
    ///
    /// The name must be unique or going live will fail.
    pub fn with_name<N: Into<String>>(&mut self, name: N) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Take the builder config live and return the created simulator.
    ///
    /// If no name has been provided for the builder then one is generated
    /// in the format `<app>-p<pid>-<N>` where:
    ///  - the app name is drawn from `argv[0]` of the executable
    ///  - pid is the process id
    ///  - N is a counter of sims taken live by this process, starting at 0
    pub fn live(&mut self) -> Result<Sim> {
        let name = match &self.name {
            Some(n) => n.clone(),
            None => default_name(),
        };
        let dir = env::temp_dir().join("gpiosysfs-sim").join(&name);
        if dir.exists() {
            return Err(Error::SimulatorExists(name));
        }
        let mut sim = Sim {
            name,
            pins: self.pins.clone(),
            dir,
        };
        if let Err(e) = sim.live() {
            sim.cleanup();
            return Err(e);
        }
        Ok(sim)
    }
}

/// The physical value of a pin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    /// The pin is physically high.
    High,

    /// The pin is physically low.
    Low,
}

/// Create a unique, but predictable, name for the simulator.
///
/// The name format is `<app>-p<pid>-<N>[-<instance>]`
/// where:
///   - the app name provided by the caller
///   - pid is the process id
///   - N is a counter of the sims created, starting at 0
///   - instance is optionally provided by the caller
pub fn unique_name(app: &str, instance: Option<&str>) -> String {
    global_counter!(SIM_COUNT, u32, 0);

    let mut name = format!("{}-p{}-{}", app, process::id(), SIM_COUNT.inc_cloning());
    if let Some(i) = instance {
        name += "-";
        name += i;
    }
    name
}

// Helper to write to simulated attribute files.
fn write_attr<D: AsRef<[u8]>>(p: &Path, file: &str, data: D) -> Result<()> {
    let path = p.join(file);
    fs::write(path, data).map_err(Error::IoError)
}

// Helper to read from simulated attribute files.
fn read_attr(p: &Path, file: &str) -> Result<String> {
    let path = p.join(file);
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(Error::IoError)
}

fn last_written(p: &Path, file: &str) -> Result<Option<PinId>> {
    let s = read_attr(p, file)?;
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<PinId>()
        .map(Some)
        .map_err(|_| Error::UnexpectedValue(s))
}

fn app_name() -> String {
    if let Some(app) = env::args_os().next() {
        if let Some(path) = Path::new(app.as_os_str()).file_name() {
            if let Some(app) = path.to_str() {
                return app.into();
            }
        }
    }
    "gpiosysfs".into()
}

fn default_name() -> String {
    unique_name(&app_name(), None)
}

/// The result for [`gpiosysfs_sim`] functions.
///
/// [`gpiosysfs_sim`]: crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`gpiosysfs_sim`] functions.
///
/// [`gpiosysfs_sim`]: crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Attempt to take a simulator live with the name of an active simulator.
    #[error("Simulator with name {0:?} already exists")]
    SimulatorExists(String),

    /// The pin is not part of the simulator.
    #[error("Pin {0} is not simulated")]
    UnknownPin(PinId),

    /// An unexpected value was read from a simulated attribute file.
    #[error("Read unexpected attr value {0:?}")]
    UnexpectedValue(String),

    /// An IO error detected while accessing a simulated attribute file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
