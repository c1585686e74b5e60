// Primitive wrappers
pub mod skeleton;
pub mod tooltip;

// Legend parts shared by captions
pub mod legend;

// Visualization loading shells
pub mod skeleton_caption;
pub mod visualization_skeleton;

pub use legend::*;
pub use skeleton::*;
pub use skeleton_caption::*;
pub use tooltip::*;
pub use visualization_skeleton::*;
