pub mod error;
pub mod interface;
pub mod linear;
pub mod loader;
pub mod model;

#[cfg(test)]
pub mod testing;
