//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::design::error::InvalidParameterError;
pub use crate::normal::error::NormalDistErr;

#[derive(Error, Debug)]
pub enum AbpowerErr {
    #[error("invalid parameter: {0}")]
    InvalidParameter(InvalidParameterError),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
}
