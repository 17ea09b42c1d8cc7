extern crate self as likr_core;

pub mod log;
pub mod time;
