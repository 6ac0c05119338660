pub mod constant;
pub mod error;
pub mod sync;
