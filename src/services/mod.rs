// Service module exports

pub mod drag;
pub mod schedule;
pub mod task;
