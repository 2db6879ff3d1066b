//! Artistweb Render - Renderers for reduced artist graphs
//!
//! Nodes are coloured by their proximity to the seed artists, from the near
//! colour (seeds) to the far colour (most distant nodes).

pub mod color;
pub mod dot;
pub mod json;
pub mod options;
pub mod proximity;

pub use color::{ColorError, Rgb};
pub use dot::DotRenderer;
pub use json::JsonRenderer;
pub use options::{Artifact, RenderOptions};
pub use proximity::proximity;
