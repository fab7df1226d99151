pub mod glyphs;
pub mod layout;
pub mod render;

pub use glyphs::tile_art;
pub use layout::{required_size, EditorLayout};
pub use render::draw_editor;
