use crate::compose;
use crate::core::convert::convert_service;
use crate::core::{ConfigProvider, KubeConfig, ManifestSource, Pipeline, ServiceDefinition, Storage};
use crate::utils::error::Result;

pub struct ComposePipeline<M: ManifestSource, S: Storage, C: ConfigProvider> {
    manifest: M,
    storage: S,
    config: C,
}

impl<M: ManifestSource, S: Storage, C: ConfigProvider> ComposePipeline<M, S, C> {
    pub fn new(manifest: M, storage: S, config: C) -> Self {
        Self {
            manifest,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<M: ManifestSource, S: Storage, C: ConfigProvider> Pipeline for ComposePipeline<M, S, C> {
    async fn extract(&self) -> Result<Vec<(String, ServiceDefinition)>> {
        tracing::debug!("Reading compose manifest: {}", self.config.compose_file());
        let bytes = self.manifest.read_manifest().await?;

        tracing::debug!("Parsing {} bytes of YAML", bytes.len());
        compose::parse(&bytes)
    }

    async fn transform(
        &self,
        services: Vec<(String, ServiceDefinition)>,
    ) -> Result<Vec<KubeConfig>> {
        // First bad service aborts the whole batch; no partial output.
        let mut configs = Vec::with_capacity(services.len());
        for (name, definition) in &services {
            tracing::debug!("Converting service {}", name);
            configs.push(convert_service(name, definition)?);
        }
        Ok(configs)
    }

    async fn load(&self, configs: Vec<KubeConfig>) -> Result<Vec<String>> {
        let mut paths = Vec::with_capacity(configs.len());
        for config in &configs {
            let filename = format!("{}-{}.json", config.name, config.obj_type.as_str());
            self.storage.write_file(&filename, &config.data).await?;
            paths.push(format!("{}/{}", self.config.output_dir(), filename));
        }
        Ok(paths)
    }
}
