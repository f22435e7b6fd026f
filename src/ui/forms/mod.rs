//! Form rendering utilities

mod field_renderer;

pub use field_renderer::draw_field;
