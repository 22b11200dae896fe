use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("transport not available: {0}")]
    NotAvailable(String),

    #[error("request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("request to {url} timed out")]
    TimedOut { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TransportError::RequestFailed {
            url: "https://catalog.test/forms/f1".to_string(),
            message: "connection reset".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "request to https://catalog.test/forms/f1 failed: connection reset"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let error: TransportError = io_error.into();

        assert!(matches!(error, TransportError::Io(_)));
    }
}
