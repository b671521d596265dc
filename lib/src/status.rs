// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Error;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The outcome of the most recent operation performed on a pin handle.
///
/// Every operation that performs I/O on a handle overwrites its status,
/// so the status reflects only the last operation, not the history of the handle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Status {
    /// The operation succeeded.
    #[default]
    Ok,

    /// An internal I/O helper was passed an empty argument.
    InternalBadArg,

    /// An attribute file could not be opened.
    FileOpenError,

    /// An attribute file could not be fully written.
    FileWriteError,

    /// An attribute file could not be read, or contained an unrecognised value.
    FileReadError,

    /// The value file could not be rewound.
    FileSeekError,

    /// A wait for an edge expired with no activity.
    ///
    /// This is not a hard failure and the wait may be retried.
    Timeout,

    /// The pin is already held by another handle in this process.
    AlreadyClaimed,
}

impl Status {
    /// Returns true if the status indicates success.
    #[inline]
    pub fn is_ok(&self) -> bool {
        *self == Status::Ok
    }

    /// Returns true if the failed operation is expected to succeed if retried.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        *self == Status::Timeout
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Ok => "ok",
            Status::InternalBadArg => "internal error: bad argument",
            Status::FileOpenError => "file open error",
            Status::FileWriteError => "file write error",
            Status::FileReadError => "file read error",
            Status::FileSeekError => "file seek error",
            Status::Timeout => "timeout",
            Status::AlreadyClaimed => "already claimed",
        };
        write!(f, "{}", msg)
    }
}

impl From<&Error> for Status {
    fn from(e: &Error) -> Self {
        match e {
            Error::BadArgument(_) => Status::InternalBadArg,
            Error::Open(..) | Error::NotOpen(_) => Status::FileOpenError,
            Error::Write(..) => Status::FileWriteError,
            Error::Read(..) | Error::Wait(..) | Error::UnexpectedValue(..) => Status::FileReadError,
            Error::Seek(..) => Status::FileSeekError,
            Error::Timeout(_) => Status::Timeout,
            Error::AlreadyClaimed(_) => Status::AlreadyClaimed,
        }
    }
}

impl<T> From<&crate::Result<T>> for Status {
    fn from(res: &crate::Result<T>) -> Self {
        match res {
            Ok(_) => Status::Ok,
            Err(e) => Status::from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_err() -> io::Error {
        io::Error::from(io::ErrorKind::Other)
    }

    #[test]
    fn default() {
        assert_eq!(Status::default(), Status::Ok);
    }

    #[test]
    fn is_ok() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::Timeout.is_ok());
        assert!(!Status::FileOpenError.is_ok());
    }

    #[test]
    fn is_retryable() {
        assert!(Status::Timeout.is_retryable());
        assert!(!Status::Ok.is_retryable());
        assert!(!Status::FileReadError.is_retryable());
        assert!(!Status::AlreadyClaimed.is_retryable());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Status::Ok), "ok");
        assert_eq!(
            format!("{}", Status::InternalBadArg),
            "internal error: bad argument"
        );
        assert_eq!(format!("{}", Status::FileOpenError), "file open error");
        assert_eq!(format!("{}", Status::FileWriteError), "file write error");
        assert_eq!(format!("{}", Status::FileReadError), "file read error");
        assert_eq!(format!("{}", Status::FileSeekError), "file seek error");
        assert_eq!(format!("{}", Status::Timeout), "timeout");
        assert_eq!(format!("{}", Status::AlreadyClaimed), "already claimed");
    }

    #[test]
    fn from_error() {
        let p = "/sys/class/gpio/gpio4/value";
        assert_eq!(
            Status::from(&Error::BadArgument("text")),
            Status::InternalBadArg
        );
        assert_eq!(
            Status::from(&Error::Open(p.into(), io_err())),
            Status::FileOpenError
        );
        assert_eq!(Status::from(&Error::NotOpen(4)), Status::FileOpenError);
        assert_eq!(
            Status::from(&Error::Write(p.into(), io_err())),
            Status::FileWriteError
        );
        assert_eq!(
            Status::from(&Error::Read(p.into(), io_err())),
            Status::FileReadError
        );
        assert_eq!(
            Status::from(&Error::Wait(p.into(), io_err())),
            Status::FileReadError
        );
        assert_eq!(
            Status::from(&Error::UnexpectedValue(p.into(), "2".into())),
            Status::FileReadError
        );
        assert_eq!(
            Status::from(&Error::Seek(p.into(), io_err())),
            Status::FileSeekError
        );
        assert_eq!(Status::from(&Error::Timeout(p.into())), Status::Timeout);
        assert_eq!(
            Status::from(&Error::AlreadyClaimed(4)),
            Status::AlreadyClaimed
        );
    }

    #[test]
    fn from_result() {
        let ok: crate::Result<bool> = Ok(true);
        assert_eq!(Status::from(&ok), Status::Ok);
        let err: crate::Result<bool> = Err(Error::NotOpen(2));
        assert_eq!(Status::from(&err), Status::FileOpenError);
    }
}
