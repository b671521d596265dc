// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive I/O on sysfs attribute files.
//!
//! These functions do not record status - that is the job of the pin handle
//! wrapping them.

use crate::{Error, Result};
use libc::{c_long, pollfd, ppoll, sigset_t, time_t, timespec, POLLERR, POLLPRI};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::ptr::null;
use std::time::Duration;

/// Write a string to an attribute file.
pub(crate) fn write_str(path: &Path, text: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::BadArgument("path"));
    }
    if text.is_empty() {
        return Err(Error::BadArgument("text"));
    }
    let mut f = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::Open(path.into(), e))?;
    f.write_all(text.as_bytes())
        .map_err(|e| Error::Write(path.into(), e))
}

/// Write a single '1' or '0' byte to an attribute file.
pub(crate) fn write_bit(path: &Path, bit: bool) -> Result<()> {
    write_str(path, bit_str(bit))
}

/// Read the first whitespace delimited token from an attribute file.
pub(crate) fn read_str(path: &Path) -> Result<String> {
    if path.as_os_str().is_empty() {
        return Err(Error::BadArgument("path"));
    }
    let mut f = File::open(path).map_err(|e| Error::Open(path.into(), e))?;
    let mut s = String::new();
    f.read_to_string(&mut s)
        .map_err(|e| Error::Read(path.into(), e))?;
    Ok(s.split_whitespace().next().unwrap_or_default().to_string())
}

/// Read a single byte from an attribute file, '1' being true.
pub(crate) fn read_bit(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() {
        return Err(Error::BadArgument("path"));
    }
    let mut f = File::open(path).map_err(|e| Error::Open(path.into(), e))?;
    read_byte(&mut f, path)
}

/// Rewind an open value file and read its level.
///
/// sysfs only refreshes the content of a value file on a read from the start.
pub(crate) fn read_value(mut f: &File, path: &Path) -> Result<bool> {
    f.seek(SeekFrom::Start(0))
        .map_err(|e| Error::Seek(path.into(), e))?;
    read_byte(&mut f, path)
}

/// Rewind an open value file and write its level.
pub(crate) fn write_value(mut f: &File, path: &Path, bit: bool) -> Result<()> {
    f.seek(SeekFrom::Start(0))
        .map_err(|e| Error::Seek(path.into(), e))?;
    f.write_all(bit_str(bit).as_bytes())
        .map_err(|e| Error::Write(path.into(), e))
}

fn read_byte<R: Read>(r: &mut R, path: &Path) -> Result<bool> {
    let mut buf = [0_u8; 1];
    r.read_exact(&mut buf)
        .map_err(|e| Error::Read(path.into(), e))?;
    Ok(buf[0] == b'1')
}

#[inline]
fn bit_str(bit: bool) -> &'static str {
    if bit {
        "1"
    } else {
        "0"
    }
}

/// Wait for the file to report priority data, which is how sysfs signals
/// an edge on a value file.
///
/// Returns false if the timeout expires first.
pub(crate) fn wait_priority(f: &File, d: Duration) -> io::Result<bool> {
    let mut pfd = pollfd {
        fd: f.as_raw_fd(),
        events: POLLPRI | POLLERR,
        revents: 0,
    };
    let timeout = to_timespec(d);
    unsafe {
        match ppoll(
            std::ptr::addr_of_mut!(pfd),
            1,
            std::ptr::addr_of!(timeout),
            null() as *const sigset_t,
        ) {
            -1 => Err(io::Error::last_os_error()),
            0 => Ok(false),
            _ => Ok(true),
        }
    }
}

// saturates at the longest wait time_t can express
fn to_timespec(d: Duration) -> timespec {
    timespec {
        tv_sec: time_t::try_from(d.as_secs()).unwrap_or(time_t::MAX),
        tv_nsec: d.subsec_nanos() as c_long,
    }
}
