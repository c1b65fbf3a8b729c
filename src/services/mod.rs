pub mod profile;
pub mod regions;

use crate::error::AppError;
use crate::models::{RegionsData, Server};
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait AppService: Clone + Send + Sync + 'static {
    async fn get_regions(&self) -> Result<RegionsData, AppError>;
    async fn save_profile(&self, server: &Server) -> Result<PathBuf, AppError>;
}

#[derive(Clone, Copy)]
pub struct ProductionAppService;

#[async_trait]
impl AppService for ProductionAppService {
    async fn get_regions(&self) -> Result<RegionsData, AppError> {
        regions::RegionsService::fetch_regions().await
    }

    async fn save_profile(&self, server: &Server) -> Result<PathBuf, AppError> {
        Ok(profile::ProfileService::save_to_downloads(server).await?)
    }
}
