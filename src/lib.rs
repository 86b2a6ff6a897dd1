pub mod config;
pub mod controllers;
pub mod dto;
pub mod entity;
pub mod routes;
pub mod service;
pub mod utils;

use config::ServiceConfig;
use std::sync::Arc;
use utils::gemini::ImageModel;

pub struct ServiceState {
    pub config: ServiceConfig,
    pub model: Arc<dyn ImageModel>,
}

impl ServiceState {
    pub fn new(config: ServiceConfig, model: Arc<dyn ImageModel>) -> Self {
        Self { config, model }
    }
}
