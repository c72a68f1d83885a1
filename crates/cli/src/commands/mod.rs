pub mod components;
pub mod params;
pub mod show;
pub mod validate;
pub mod write;

pub use components::*;
pub use params::*;
pub use show::*;
pub use validate::*;
pub use write::*;
