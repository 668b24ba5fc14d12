//! Value types shared by the payload builder and renderer.

mod amount;
mod codes;
mod purpose;

pub use amount::*;
pub use codes::*;
pub use purpose::*;
