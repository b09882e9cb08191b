#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod profile;
pub use profile::*;

mod blocks;
pub use blocks::*;

mod error;
pub use error::*;

mod report;
pub use report::*;

mod driver;
pub use driver::*;

#[cfg(test)]
mod test;
