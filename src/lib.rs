pub mod structs;
pub mod services;
pub mod helpers;
pub mod enums;
pub mod errors;
pub mod config;
pub mod workers;
