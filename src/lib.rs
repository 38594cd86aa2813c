pub mod config;
pub mod error;
pub mod header;
pub mod input;
pub mod messages;
pub mod round;
pub mod session;
pub mod signal;

pub use config::GameConfig;
pub use error::GuessError;
pub use header::HeaderSource;
pub use round::{Round, RoundOutcome};
pub use session::Session;
pub use signal::UserSignal;
