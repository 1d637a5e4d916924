//! Session commands that frame the searches: setup, readiness handshake,
//! interruption and shutdown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line the engine answers `isready` with.
pub const READY_OK: &str = "readyok";

/// A command line outside the `position`/`go` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCommand {
    /// Forget the previous game before a new one starts.
    NewGame,
    /// Ask for `readyok` once pending commands are processed.
    IsReady,
    /// Set an engine option, with or without a value.
    SetOption { name: String, value: Option<String> },
    /// Toggle engine debug output.
    Debug(bool),
    /// Return a `bestmove` for the running search now.
    Stop,
    Quit,
}

impl EngineCommand {
    #[must_use]
    pub fn set_option(name: impl Into<String>, value: impl Into<String>) -> Self {
        EngineCommand::SetOption {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Option without a value, such as a button.
    #[must_use]
    pub fn set_flag(name: impl Into<String>) -> Self {
        EngineCommand::SetOption {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCommand::NewGame => write!(f, "newgame"),
            EngineCommand::IsReady => write!(f, "isready"),
            EngineCommand::SetOption { name, value: Some(value) } => {
                write!(f, "setoption name {name} value {value}")
            }
            EngineCommand::SetOption { name, value: None } => write!(f, "setoption name {name}"),
            EngineCommand::Debug(true) => write!(f, "debug on"),
            EngineCommand::Debug(false) => write!(f, "debug off"),
            EngineCommand::Stop => write!(f, "stop"),
            EngineCommand::Quit => write!(f, "quit"),
        }
    }
}

/// Is `line` the engine's answer to `isready`?
#[must_use]
pub fn is_ready_ok(line: &str) -> bool {
    line.trim() == READY_OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_commands() {
        assert_eq!(EngineCommand::NewGame.to_string(), "newgame");
        assert_eq!(EngineCommand::IsReady.to_string(), "isready");
        assert_eq!(EngineCommand::Stop.to_string(), "stop");
        assert_eq!(EngineCommand::Quit.to_string(), "quit");
        assert_eq!(EngineCommand::Debug(true).to_string(), "debug on");
        assert_eq!(EngineCommand::Debug(false).to_string(), "debug off");
    }

    #[test]
    fn test_setoption() {
        assert_eq!(
            EngineCommand::set_option("Hash", "64").to_string(),
            "setoption name Hash value 64"
        );
        assert_eq!(
            EngineCommand::set_flag("Clear Hash").to_string(),
            "setoption name Clear Hash"
        );
    }

    #[test]
    fn test_ready_reply() {
        assert!(is_ready_ok("readyok"));
        assert!(is_ready_ok("readyok\r\n"));
        assert!(!is_ready_ok("bestmove a7"));
        assert!(!is_ready_ok(""));
    }
}
