//! HTTP surface of the boarding-kennel booking service.

pub mod app;
pub mod config;
pub mod db_handler;
pub mod error;
pub mod middleware;
