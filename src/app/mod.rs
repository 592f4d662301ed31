//! Application-Layer: Session, Commands und Command-Log.

pub mod command;
pub mod command_log;
/// Editier-Session
///
/// Besitzt die Kurve, die Optionen und den optionalen Sync-Client.
pub mod session;

pub use command::CurveCommand;
pub use command_log::CommandLog;
pub use session::EditSession;
