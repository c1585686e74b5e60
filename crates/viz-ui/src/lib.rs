pub mod components;

#[cfg(test)]
pub(crate) mod test_support;

pub use components::*;
pub use viz_types::{SkeletonCaptionSize, SkeletonConfig};
