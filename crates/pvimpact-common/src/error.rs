use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("Service life must be at least one year")]
    ZeroServiceLife,

    #[error("PV capacity must be a finite number, got {0}")]
    NonFiniteCapacity(f64),

    #[error("PV capacity must be greater than zero, got {0}")]
    NonPositiveCapacity(f64),

    #[error("Result for {0} is out of range")]
    ResultOutOfRange(&'static str),

    #[error("Invalid conversion factor `{name}`: {reason}")]
    InvalidFactor { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ImpactError>;
