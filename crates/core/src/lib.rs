#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod compile;
pub mod config;
pub mod export;
pub mod template;
pub mod workflow;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
