#![cfg_attr(test, allow(clippy::unwrap_used))]

mod sensitive;

pub mod pages;
pub mod status;

pub use sensitive::Sensitive;
pub use status::{StatusCarrier, StatusKind, StatusMessages};
