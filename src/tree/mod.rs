//! Virtual filesystem tree: node model, loader, path resolution and content access.

pub mod content;
pub mod loader;
pub mod node;
pub mod resolver;

pub use loader::load;
pub use node::{Directory, File, Node, NodeRef, TransportEncoding, ROOT_NAME};
pub use resolver::{normalize, resolve, SEPARATOR};
