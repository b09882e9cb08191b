#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod misc;
pub use misc::*;

mod logging;
pub use logging::*;
