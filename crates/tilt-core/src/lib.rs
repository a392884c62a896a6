pub mod config;
pub mod constants;
pub mod geometry;
pub mod responder;
pub mod spring;

pub use config::*;
pub use geometry::*;
pub use responder::*;
pub use spring::*;
