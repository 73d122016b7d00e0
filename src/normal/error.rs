//----------------------------------------
// Normal distribution errors
//----------------------------------------
use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for AbpowerErr {
    fn from(err: NormalDistErr) -> Self {
        AbpowerErr::NormalDist(err)
    }
}
