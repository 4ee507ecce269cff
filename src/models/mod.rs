// Module exports for models

pub mod drag;
pub mod list;
pub mod task;
