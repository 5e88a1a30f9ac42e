#[macro_use]
extern crate tracing;

pub mod converter;

pub use crate::converter::{Converter, Summary};
