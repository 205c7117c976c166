use derive_more::Display;

/// Reasons a decoded payload is refused at the fetch boundary.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "{} dates but {} predicted values", dates, predicted)]
    LengthMismatch { dates: usize, predicted: usize },
    #[display(fmt = "predicted value at index {} is not a finite number", index)]
    NonFinite { index: usize },
    #[display(fmt = "prediction series is empty")]
    Empty,
}

impl std::error::Error for ValidationError {}

/// Every way a prediction request can fail.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PredictionError {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP {}: {}", status, message)]
    Http { status: u16, message: String },
    #[display(fmt = "Malformed response: {}", _0)]
    Decode(String),
    #[display(fmt = "Invalid prediction: {}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Request timed out after {} ms", _0)]
    Timeout(u32),
}

impl std::error::Error for PredictionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictionError::Validation(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ValidationError> for PredictionError {
    fn from(err: ValidationError) -> Self {
        PredictionError::Validation(err)
    }
}
