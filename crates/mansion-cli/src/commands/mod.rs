//! Command implementations.

pub mod map;
pub mod play;
pub mod suspects;

pub use self::map::execute_map;
pub use self::play::execute_play;
pub use self::suspects::execute_suspects;
