pub use anyhow::Result;

pub use crate::descriptor::{Descriptor, LineFault};
pub use crate::infra::utils::read_file_to_string;
