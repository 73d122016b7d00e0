//----------------------------------------
// Modules
//----------------------------------------
pub mod from_counts;
