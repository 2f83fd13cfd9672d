mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod lists;
pub use lists::*;
