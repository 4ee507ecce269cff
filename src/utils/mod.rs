// Utility module exports

pub mod date;
pub mod slot;
