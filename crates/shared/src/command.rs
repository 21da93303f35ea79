/// Errors raised by the engine. Empty pools and unreachable ceilings are not
/// errors, they resolve to empty slots.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller broke an input contract: bad coordinates, out of range meal
    /// counts, duplicate vocabulary entries.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("{0}")]
    User(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

/// Refuses a requested edit. The message is meant to be shown to the user as is.
#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::User(($err).to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! precondition {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Precondition(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Precondition(($err).to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Precondition(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refuse(locked: bool) -> Result<()> {
        if locked {
            crate::user!("slot is locked");
        }

        Ok(())
    }

    fn check_meals(meals: u8) -> Result<u8> {
        if meals == 0 {
            crate::precondition!("meals per day must be at least 1, got {}", meals);
        }

        Ok(meals)
    }

    #[test]
    fn test_user_macro_returns_user_error() {
        let err = refuse(true).unwrap_err();
        assert!(err.is_user());
        assert_eq!(err.to_string(), "slot is locked");
        assert!(refuse(false).is_ok());
    }

    #[test]
    fn test_precondition_macro_formats_arguments() {
        let err = check_meals(0).unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(
            err.to_string(),
            "precondition violated: meals per day must be at least 1, got 0"
        );
    }
}
