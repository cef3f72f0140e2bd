pub mod admonition;
pub mod config;
pub mod convert;
pub mod grammar;
pub mod lines;
pub mod live;
pub mod render;

pub use admonition::{AdmonitionKind, AdmonitionMeta, ParseOptions};
pub use convert::convert;
pub use grammar::{AdmonitionBlock, Block};
pub use live::{LiveRange, Selection, compute_live_ranges};
pub use render::markdown::{CmarkRenderer, MarkdownRenderer};
pub use render::pipeline::render_document;
