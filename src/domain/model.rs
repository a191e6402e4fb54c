use serde::{Deserialize, Serialize};

/// One service entry from a compose manifest, as handed over by the parser.
/// The service name is carried alongside as the manifest map key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub image: String,
    pub command: Vec<String>,
    /// CPU share count; 0 means unset.
    pub cpu_shares: i64,
    /// Memory limit in bytes; 0 means unset.
    pub mem_limit: i64,
    /// `KEY=VALUE` entries in manifest order.
    pub environment: Vec<String>,
    /// Port strings in manifest order, each expected to be a bare integer.
    pub ports: Vec<String>,
    pub restart: String,
}

/// Which Kubernetes object a service converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Pod,
    ReplicationController,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Pod => "pod",
            ObjectType::ReplicationController => "rc",
        }
    }
}

/// One converted resource object, ready to be persisted by the writer.
#[derive(Debug, Clone)]
pub struct KubeConfig {
    pub name: String,
    pub obj_type: ObjectType,
    /// Pretty-printed JSON body.
    pub data: Vec<u8>,
}
