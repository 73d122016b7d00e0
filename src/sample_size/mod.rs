//----------------------------------------
// Modules
//----------------------------------------
pub mod compute_ss;
pub mod types;
