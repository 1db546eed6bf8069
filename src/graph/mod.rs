pub mod assemble;
pub mod build;
pub mod model;
pub mod synthesize;

pub use assemble::*;
pub use build::*;
pub use model::*;
pub use synthesize::*;
