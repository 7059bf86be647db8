//! Reusable UI components for the review journal TUI.
//!
//! Components are stateless renderers: each takes an explicit view context
//! and returns a string, keeping all mutable state in the application model.

mod review_detail;
mod review_form;
mod review_list;
mod text_wrap;

pub use review_detail::{ReviewDetailComponent, ReviewDetailViewContext};
pub use review_form::{ReviewFormComponent, ReviewFormViewContext};
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use text_wrap::wrap_text;
