pub mod error;
pub mod validation;
pub mod clock;
pub mod model;
pub mod db;
pub mod ops;
pub mod queries;
pub mod store;
pub mod cli;
