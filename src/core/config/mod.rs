mod base;
pub mod constant;
mod entity;

pub use base::*;
pub use constant::*;
pub use entity::*;
