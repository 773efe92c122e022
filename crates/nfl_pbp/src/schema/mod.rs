pub mod field_position;
pub mod game;
pub mod game_clock;
pub mod normalized;
pub mod play_type;
pub mod raw_row;
pub mod value;

pub use field_position::*;
pub use game::*;
pub use game_clock::*;
pub use normalized::*;
pub use play_type::*;
pub use raw_row::*;
pub use value::*;
