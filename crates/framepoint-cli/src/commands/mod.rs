pub mod config;
pub mod info;
pub mod project;
pub mod scan;
pub mod validate;
