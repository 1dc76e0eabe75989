pub mod constants;
pub mod io;
pub mod models;
pub mod physics;
pub mod tables;
pub mod utils;
