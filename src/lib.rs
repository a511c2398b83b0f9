pub mod charts;
pub mod config;
pub mod controllers;
pub mod enums;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
