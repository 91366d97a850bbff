use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrollerError>;

/// Configuration errors surfaced at construction time.
///
/// Routine input outcomes (clicks outside the widget, out-of-domain
/// positions, out-of-bounds ranges) are clamped and never reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollerError {
    #[error("divide coefficient must be positive, got {value}")]
    InvalidDivideCoeff { value: i64 },

    #[error("render size must be finite and positive, got {value}")]
    InvalidRenderSize { value: f64 },

    #[error("cross-axis bounds are inverted: min {min} > max {max}")]
    InvertedCrossAxis { min: f64, max: f64 },

    #[error("display range bounds must be at least 1")]
    ZeroDisplayRange,

    #[error("minimum display range {min} exceeds initial display range {init}")]
    MinRangeExceedsInit { min: u64, init: u64 },

    #[error("minimum display range {min} exceeds domain size {domain}")]
    MinRangeExceedsDomain { min: String, domain: String },
}

impl ScrollerError {
    #[must_use]
    pub fn min_range_exceeds_domain(min: impl ToString, domain: impl ToString) -> Self {
        Self::MinRangeExceedsDomain {
            min: min.to_string(),
            domain: domain.to_string(),
        }
    }
}
