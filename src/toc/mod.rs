mod builder;
mod filter;
mod renderer;
pub mod types;

pub use builder::build_tree;
pub use filter::filter_headings;
pub use renderer::{render_toc, render_tree};
pub use types::{Exclude, Heading, TocNode, TocOptions};
