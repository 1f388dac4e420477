// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Closed enumeration of the application log files exposed to the log
//! viewer. Each variant carries its fixed on-disk filename; anything outside
//! the four known keys is rejected as a value, never a panic.

use std::str::FromStr;

use thiserror::Error;

/// The four enumerated log files under the base log directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFile {
    Connector,
    System,
    Exception,
    Debug,
}

/// A log key outside the closed enumeration, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Log file is not valid. Log file name is {0}")]
pub struct InvalidLogKey(pub String);

impl LogFile {
    pub const ALL: [LogFile; 4] = [
        LogFile::Connector,
        LogFile::System,
        LogFile::Exception,
        LogFile::Debug,
    ];

    /// Fixed on-disk filename for this log.
    pub fn file_name(&self) -> &'static str {
        match self {
            LogFile::Connector => "connector.log",
            LogFile::System => "system.log",
            LogFile::Exception => "exception.log",
            LogFile::Debug => "debug.log",
        }
    }

    /// Stable key accepted at dynamic boundaries (CLI parameters).
    pub fn key(&self) -> &'static str {
        match self {
            LogFile::Connector => "connector",
            LogFile::System => "system",
            LogFile::Exception => "exception",
            LogFile::Debug => "debug",
        }
    }
}

impl FromStr for LogFile {
    type Err = InvalidLogKey;

    // Case-sensitive: "Connector" is not a valid key.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "connector" => Ok(LogFile::Connector),
            "system" => Ok(LogFile::System),
            "exception" => Ok(LogFile::Exception),
            "debug" => Ok(LogFile::Debug),
            other => Err(InvalidLogKey(other.to_string())),
        }
    }
}
