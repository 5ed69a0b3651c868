pub mod error;
pub mod model;
pub mod phone;
pub mod repo;
pub mod service;
