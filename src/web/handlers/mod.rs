//! HTML template rendering handlers for the public blog pages.

mod comment;
mod posts;
mod share;

pub use comment::{comment_handler, post_only_handler};
pub use posts::{post_detail_handler, post_list_by_tag_handler, post_list_handler};
pub use share::{share_form_handler, share_submit_handler};
