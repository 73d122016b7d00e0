//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for sizing
//! two-arm A/B tests on conversion-style rates: required sample size per
//! group and in total, test duration under a daily traffic split, achieved
//! power, and the sensitivity of all of these to the minimum detectable
//! effect.

mod baseline;
/// This module houses the public API for computing sample sizes, achieved
/// power, baseline rates, and sensitivity sweeps
pub mod compute;
mod design;
/// This module contains error types
pub mod error;
mod normal;
/// This module renders computed designs as plain-text reports and tables
pub mod report;
mod sample_size;
mod sweep;
