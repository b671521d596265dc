// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pins claimed by live handles in this process.
//!
//! The kernel does not prevent a second export of a pin, but the first handle
//! dropped would unexport the pin out from under the other, so claims are
//! tracked and a second claim on the same pin is refused.

use crate::{Error, PinId, Result};
use parking_lot::{const_mutex, Mutex};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// keyed by sysfs root so independent trees do not collide
static CLAIMED: Mutex<BTreeSet<(PathBuf, PinId)>> = const_mutex(BTreeSet::new());

/// A claim on a pin, released when dropped.
#[derive(Debug)]
pub(crate) struct Claim {
    key: (PathBuf, PinId),
}

/// Claim a pin for a handle.
pub(crate) fn claim(root: &Path, pin: PinId) -> Result<Claim> {
    let key = (root.to_path_buf(), pin);
    if !CLAIMED.lock().insert(key.clone()) {
        return Err(Error::AlreadyClaimed(pin));
    }
    Ok(Claim { key })
}

impl Drop for Claim {
    fn drop(&mut self) {
        CLAIMED.lock().remove(&self.key);
    }
}

/// Check if a pin under the given sysfs root is held by a live handle in this process.
pub fn is_claimed<P: AsRef<Path>>(root: P, pin: PinId) -> bool {
    CLAIMED
        .lock()
        .contains(&(root.as_ref().to_path_buf(), pin))
}
