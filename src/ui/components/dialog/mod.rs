//! Modal dialog components

mod base;
mod conflict_dialog;
mod error_dialog;
mod wait_overlay;

pub use conflict_dialog::render_conflict_dialog;
pub use error_dialog::render_error_dialog;
pub use wait_overlay::render_wait_overlay;
