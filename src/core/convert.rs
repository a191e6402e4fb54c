use crate::core::kube::{
    Container, ContainerPort, EnvVar, Pod, PodSpec, Quantity, ReplicationController,
    ResourceRequirements, RestartPolicy,
};
use crate::domain::model::{KubeConfig, ObjectType, ServiceDefinition};
use crate::utils::error::{ComposeError, Result};

/// Converts one service definition into its Kubernetes config. The restart
/// policy decides both the emitted object type and the pod restart policy;
/// everything else is unconditional field mapping.
pub fn convert_service(name: &str, service: &ServiceDefinition) -> Result<KubeConfig> {
    let (obj_type, restart_policy) = resolve_restart_policy(name, &service.restart)?;

    let spec = PodSpec {
        containers: vec![build_container(name, service)?],
        restart_policy,
    };

    let data = match obj_type {
        ObjectType::Pod => serde_json::to_vec_pretty(&Pod::new(name, spec))?,
        ObjectType::ReplicationController => {
            serde_json::to_vec_pretty(&ReplicationController::wrap(name, spec))?
        }
    };

    Ok(KubeConfig {
        name: name.to_string(),
        obj_type,
        data,
    })
}

/// The one real branch in the converter. Evaluated exactly once per service.
fn resolve_restart_policy(name: &str, restart: &str) -> Result<(ObjectType, RestartPolicy)> {
    match restart {
        "" | "always" => Ok((ObjectType::ReplicationController, RestartPolicy::Always)),
        "no" | "false" => Ok((ObjectType::Pod, RestartPolicy::Never)),
        "on-failure" => Ok((ObjectType::ReplicationController, RestartPolicy::OnFailure)),
        other => Err(ComposeError::UnknownRestartPolicy {
            policy: other.to_string(),
            service: name.to_string(),
        }),
    }
}

fn build_container(name: &str, service: &ServiceDefinition) -> Result<Container> {
    let mut resources = ResourceRequirements::default();
    if service.cpu_shares != 0 {
        resources
            .limits
            .insert("cpu".to_string(), Quantity(service.cpu_shares));
    }
    if service.mem_limit != 0 {
        resources
            .limits
            .insert("memory".to_string(), Quantity(service.mem_limit));
    }

    Ok(Container {
        name: name.to_string(),
        image: service.image.clone(),
        args: service.command.clone(),
        resources,
        env: map_environment(name, &service.environment)?,
        ports: map_ports(name, &service.ports)?,
    })
}

/// Splits each `KEY=VALUE` entry on the first `=`, so values may themselves
/// contain `=`. An entry with no `=` is a fatal configuration error.
fn map_environment(name: &str, environment: &[String]) -> Result<Vec<EnvVar>> {
    environment
        .iter()
        .map(|entry| {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                ComposeError::MalformedEnv {
                    entry: entry.clone(),
                    service: name.to_string(),
                }
            })?;
            Ok(EnvVar {
                name: key.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

fn map_ports(name: &str, ports: &[String]) -> Result<Vec<ContainerPort>> {
    ports
        .iter()
        .map(|port| {
            let container_port =
                port.parse::<i32>()
                    .map_err(|_| ComposeError::InvalidPort {
                        port: port.clone(),
                        service: name.to_string(),
                    })?;
            Ok(ContainerPort { container_port })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kube::service_labels;

    fn service(restart: &str) -> ServiceDefinition {
        ServiceDefinition {
            image: "nginx".to_string(),
            restart: restart.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_restart_emits_replication_controller() {
        let mut def = service("");
        def.ports = vec!["80".to_string()];

        let config = convert_service("web", &def).unwrap();
        assert_eq!(config.name, "web");
        assert_eq!(config.obj_type, ObjectType::ReplicationController);

        let rc: ReplicationController = serde_json::from_slice(&config.data).unwrap();
        assert_eq!(rc.kind, "ReplicationController");
        assert_eq!(rc.spec.selector, service_labels("web"));
        assert_eq!(rc.spec.template.metadata.labels, service_labels("web"));
        assert_eq!(
            rc.spec.template.spec.restart_policy,
            RestartPolicy::Always
        );

        let container = &rc.spec.template.spec.containers[0];
        assert_eq!(container.image, "nginx");
        assert_eq!(container.ports, vec![ContainerPort { container_port: 80 }]);
        assert!(container.resources.limits.is_empty());
    }

    #[test]
    fn test_restart_no_emits_bare_pod_with_mem_limit() {
        let mut def = service("no");
        def.mem_limit = 536870912;

        let config = convert_service("db", &def).unwrap();
        assert_eq!(config.obj_type, ObjectType::Pod);

        let pod: Pod = serde_json::from_slice(&config.data).unwrap();
        assert_eq!(pod.kind, "Pod");
        assert_eq!(pod.metadata.name, "db");
        assert_eq!(pod.spec.restart_policy, RestartPolicy::Never);

        let limits = &pod.spec.containers[0].resources.limits;
        assert_eq!(limits.len(), 1);
        assert_eq!(limits.get("memory"), Some(&Quantity(536870912)));
        assert!(limits.get("cpu").is_none());
    }

    #[test]
    fn test_restart_false_is_bare_pod() {
        let config = convert_service("db", &service("false")).unwrap();
        assert_eq!(config.obj_type, ObjectType::Pod);
    }

    #[test]
    fn test_on_failure_wraps_with_on_failure_policy() {
        let config = convert_service("worker", &service("on-failure")).unwrap();
        assert_eq!(config.obj_type, ObjectType::ReplicationController);

        let rc: ReplicationController = serde_json::from_slice(&config.data).unwrap();
        assert_eq!(
            rc.spec.template.spec.restart_policy,
            RestartPolicy::OnFailure
        );
    }

    #[test]
    fn test_unknown_restart_policy_is_fatal() {
        let err = convert_service("z", &service("sometimes")).unwrap_err();
        match err {
            ComposeError::UnknownRestartPolicy { policy, service } => {
                assert_eq!(policy, "sometimes");
                assert_eq!(service, "z");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_port_is_fatal() {
        let mut def = service("always");
        def.ports = vec!["abc".to_string()];

        let err = convert_service("y", &def).unwrap_err();
        match err {
            ComposeError::InvalidPort { port, service } => {
                assert_eq!(port, "abc");
                assert_eq!(service, "y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_environment_splits_on_first_equals() {
        let mut def = service("always");
        def.environment = vec!["FOO=bar".to_string(), "KEY=a=b".to_string()];

        let config = convert_service("x", &def).unwrap();
        let rc: ReplicationController = serde_json::from_slice(&config.data).unwrap();
        let env = &rc.spec.template.spec.containers[0].env;

        assert_eq!(env.len(), 2);
        assert_eq!(env[0].name, "FOO");
        assert_eq!(env[0].value, "bar");
        assert_eq!(env[1].name, "KEY");
        assert_eq!(env[1].value, "a=b");
    }

    #[test]
    fn test_environment_without_equals_is_fatal() {
        let mut def = service("always");
        def.environment = vec!["NOEQUALS".to_string()];

        let err = convert_service("x", &def).unwrap_err();
        match err {
            ComposeError::MalformedEnv { entry, service } => {
                assert_eq!(entry, "NOEQUALS");
                assert_eq!(service, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_limits_are_omitted_entirely() {
        let config = convert_service("web", &service("no")).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&config.data).unwrap();

        // No resources key at all, not an empty or zero-valued one.
        assert!(body["spec"]["containers"][0].get("resources").is_none());
    }

    #[test]
    fn test_port_order_preserved_without_dedup() {
        let mut def = service("always");
        def.ports = vec!["8080".to_string(), "80".to_string(), "8080".to_string()];

        let config = convert_service("web", &def).unwrap();
        let rc: ReplicationController = serde_json::from_slice(&config.data).unwrap();
        let ports: Vec<i32> = rc.spec.template.spec.containers[0]
            .ports
            .iter()
            .map(|p| p.container_port)
            .collect();
        assert_eq!(ports, vec![8080, 80, 8080]);
    }

    #[test]
    fn test_serialized_body_round_trips_byte_identical() {
        let mut def = service("always");
        def.cpu_shares = 2;
        def.environment = vec!["FOO=bar".to_string()];
        def.ports = vec!["80".to_string()];

        let config = convert_service("web", &def).unwrap();
        let rc: ReplicationController = serde_json::from_slice(&config.data).unwrap();
        let again = serde_json::to_vec_pretty(&rc).unwrap();
        assert_eq!(again, config.data);
    }

    #[test]
    fn test_template_carries_no_nested_kind() {
        let config = convert_service("web", &service("always")).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&config.data).unwrap();

        assert!(body["spec"]["template"].get("kind").is_none());
        assert!(body["spec"]["template"].get("apiVersion").is_none());
    }
}
