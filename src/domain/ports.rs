use crate::domain::model::{KubeConfig, ServiceDefinition};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ManifestSource: Send + Sync {
    fn read_manifest(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn compose_file(&self) -> &str;
    fn output_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<(String, ServiceDefinition)>>;
    async fn transform(&self, services: Vec<(String, ServiceDefinition)>)
        -> Result<Vec<KubeConfig>>;
    async fn load(&self, configs: Vec<KubeConfig>) -> Result<Vec<String>>;
}
