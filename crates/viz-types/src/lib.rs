pub mod config;
pub mod error;
pub mod skeleton;

pub use config::*;
pub use error::*;
pub use skeleton::*;
