#[macro_use]
extern crate tracing;

pub use crate::tracing::{debug, error, info, trace, warn};

pub mod descriptor;
pub mod infra;
pub mod material;
pub mod piece;
pub mod prelude;
pub mod tier;
pub mod trace;

pub use crate::descriptor::{Descriptor, LineFault};
pub use crate::material::Material;
pub use crate::piece::{Piece, PieceKind, Side};
pub use crate::tier::Tier;
