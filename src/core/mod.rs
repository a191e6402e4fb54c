pub mod convert;
pub mod engine;
pub mod kube;
pub mod pipeline;

pub use crate::domain::model::{KubeConfig, ObjectType, ServiceDefinition};
pub use crate::domain::ports::{ConfigProvider, ManifestSource, Pipeline, Storage};
pub use crate::utils::error::Result;
