// Service module exports

pub mod export;
pub mod persistence;
pub mod store;
