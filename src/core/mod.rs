pub mod constants;
pub mod particles;
pub mod trail;
pub mod tree;

pub use particles::*;
pub use trail::*;
pub use tree::*;
