use derive_more::Display;

/// Simplified error system - one enum for the whole dashboard
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    NetworkError(String),
    #[display(fmt = "HTTP Error: status {}", _0)]
    HttpStatus(u16),
    #[display(fmt = "Parse Error: {}", _0)]
    ParseError(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    RenderingError(String),
    #[display(fmt = "Validation Error: {}", _0)]
    ValidationError(String),
}

impl AppError {
    /// Transport and HTTP failures, as opposed to a bad payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::NetworkError(_) | AppError::HttpStatus(_))
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
