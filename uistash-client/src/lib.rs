mod comments;
pub use comments::{assemble, prepend_root, CommentNode};

mod export;
pub use export::Framework;

mod filter;
pub use filter::GalleryFilter;

mod format;
pub use format::compact_number;

mod preview;
pub use preview::{decode_source, PreviewDoc};

mod templates;
pub use templates::Template;

pub mod api {
    pub use uistash_api::*;
}
