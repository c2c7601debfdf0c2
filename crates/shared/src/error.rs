use crate::Slot;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("meal source '{path}' is unavailable: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("meal source holds no complete breakfast/lunch/dinner rows")]
    EmptyCatalog,

    #[error("no compatible {0} option found")]
    NoCompatibleOption(Slot),

    #[error("not enough {slot} options left for day {}", .day + 1)]
    InsufficientOptions { slot: Slot, day: usize },

    #[error("{0}")]
    InvalidSelection(String),
}

impl Error {
    /// Errors the user can recover from by revising input or retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::NoCompatibleOption(_)
                | Error::InsufficientOptions { .. }
                | Error::InvalidSelection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidSelection(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidSelection(format!($fmt, $($arg)*)))
    };
}
