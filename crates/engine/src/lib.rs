#![forbid(unsafe_code)]

pub mod commands;
pub mod console;
pub mod error;
pub mod session;
pub mod validator;

pub use quiz_core::Clock;

pub use commands::{Command, CommandService};
pub use console::{Console, ConsoleError};
pub use error::CommandError;
pub use session::{PlaySession, SessionOutcome};
pub use validator::validate_id;
