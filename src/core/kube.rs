use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const API_VERSION: &str = "v1";

/// The one label every produced object carries. It doubles as the
/// ReplicationController selector, so template labels and selector must
/// always come from this same constructor.
pub fn service_labels(name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("service".to_string(), name.to_string());
    labels
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub labels: BTreeMap<String, String>,
}

impl ObjectMeta {
    pub fn for_service(name: &str) -> Self {
        Self {
            name: name.to_string(),
            labels: service_labels(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestartPolicy {
    Always,
    Never,
    OnFailure,
}

/// Quantities are plain decimal strings on the wire (decimalSI, no suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(pub i64);

impl Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<i64>()
            .map(Quantity)
            .map_err(|e| serde::de::Error::custom(format!("invalid quantity {raw:?}: {e}")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequirements {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<String, Quantity>,
}

impl ResourceRequirements {
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "ResourceRequirements::is_empty")]
    pub resources: ResourceRequirements,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub containers: Vec<Container>,
    pub restart_policy: RestartPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

impl Pod {
    pub fn new(name: &str, spec: PodSpec) -> Self {
        Self {
            kind: "Pod".to_string(),
            api_version: API_VERSION.to_string(),
            metadata: ObjectMeta::for_service(name),
            spec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodTemplateMeta {
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodTemplateSpec {
    pub metadata: PodTemplateMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationControllerSpec {
    pub replicas: i32,
    pub selector: BTreeMap<String, String>,
    pub template: PodTemplateSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationController {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub spec: ReplicationControllerSpec,
}

impl ReplicationController {
    /// Wraps a pod spec in a single-replica controller. Name, labels,
    /// selector, and template labels all derive from the one service name.
    pub fn wrap(name: &str, pod_spec: PodSpec) -> Self {
        Self {
            kind: "ReplicationController".to_string(),
            api_version: API_VERSION.to_string(),
            metadata: ObjectMeta::for_service(name),
            spec: ReplicationControllerSpec {
                replicas: 1,
                selector: service_labels(name),
                template: PodTemplateSpec {
                    metadata: PodTemplateMeta {
                        labels: service_labels(name),
                    },
                    spec: pod_spec,
                },
            },
        }
    }
}
