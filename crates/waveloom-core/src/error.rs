use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplerError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SamplerError {
    #[error("invalid parameter {name}: {value} (must be > 0)")]
    InvalidParameter { name: &'static str, value: f64 },
}
