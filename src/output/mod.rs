//! Writing exported pages to the local filesystem.

pub mod frontmatter;
pub mod paths;
pub mod writer;

pub use frontmatter::{page_frontmatter, parse_custom_frontmatter, Frontmatter};
pub use paths::{page_output_path, slug_filename};
pub use writer::write_page_file;
