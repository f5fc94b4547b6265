pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

// Same markers as the msg_* macros.
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn warning(msg: Message) -> String {
    format!("⚠️ {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️ {}", msg)
}

/// Prefixes a message with the marker of its level.
pub fn decorate(level: Level, msg: Message) -> String {
    match level {
        Level::Info => info(msg),
        Level::Success => success(msg),
        Level::Warning => warning(msg),
        Level::Error => error(msg),
    }
}
