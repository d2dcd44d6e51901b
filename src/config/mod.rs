// src/config/mod.rs
pub mod service;
pub mod site;

pub use service::ServiceConfig;
pub use site::{SiteConfig, UpdateAction};
