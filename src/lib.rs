pub mod commands;
pub mod confirm;
pub mod error;
pub mod model;
pub mod output;
pub mod projection;
pub mod service;
pub mod store;
