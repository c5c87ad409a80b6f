use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    Duplicate(String),
    Io(std::io::Error),
    NotFound(String),
    Parse(String),
    ParseCommand(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::Parse(format!("data file is not valid UTF-8: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Duplicate(msg) => {
                write!(f, "Duplicate contact: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Parse(msg) => {
                write!(f, "Parse error: {}", msg)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Csv(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("First name and phone are required".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: First name and phone are required"
        );
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        assert!(format!("{}", err).starts_with("I/O error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = AppError::from(bad);

        assert!(matches!(err, AppError::Parse(_)));
    }
}
