// Module exports for models

pub mod day;
pub mod drag;
pub mod event;
