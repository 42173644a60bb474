pub mod namespace;
pub mod node;
pub mod port;

pub use namespace::*;
pub use node::*;
pub use port::*;
