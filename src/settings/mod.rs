pub mod env;
pub mod model;
