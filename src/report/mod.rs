//----------------------------------------
// Modules
//----------------------------------------
pub mod format;
pub mod render;
