pub mod board;
pub mod dims;
pub mod form;
pub mod state;
pub mod tile;

pub use board::{Board, BoardError};
pub use dims::{validate_dimensions, Dimension, ValidationError};
pub use form::{ConfigForm, FormField};
pub use state::{DropEvent, Editor, Focus};
pub use tile::TileKind;
