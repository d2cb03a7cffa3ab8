//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from `'static` content records and local signals handed
//! in by pages. None of them reach for global context except the navbar and
//! footer, which read the router location.

pub mod artwork_lightbox;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod category_filter;
pub mod footer;
pub mod home_circle;
pub mod navbar;
pub mod page_meta;
pub mod progress_bar;
pub mod section_header;
pub mod video_embed;
