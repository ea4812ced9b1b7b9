//! World: the locations a session moves between

pub mod location;
pub mod map;

pub use location::Location;
pub use map::Map;
