pub mod handlers;
pub mod labels;
pub mod model;
pub mod routes;
pub mod server_api;
