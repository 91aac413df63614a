mod core;
mod shared;
mod slot;

pub use self::core::*;
pub use shared::*;
pub use slot::*;
