// Compose manifest parsing: raw YAML bytes into an ordered service list.

use crate::domain::model::ServiceDefinition;
use crate::utils::error::{ComposeError, Result};
use serde::Deserialize;

/// Compose v1 allows `command` as a single shell line or an argv list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CommandField {
    Line(String),
    List(Vec<String>),
}

/// `environment` may be a `KEY=VALUE` list or a key/value map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EnvironmentField {
    List(Vec<String>),
    Map(serde_yaml::Mapping),
}

/// YAML port entries are often written as bare integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PortField {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawService {
    image: String,
    command: Option<CommandField>,
    cpu_shares: i64,
    mem_limit: i64,
    environment: Option<EnvironmentField>,
    ports: Vec<PortField>,
    restart: String,
}

impl RawService {
    fn into_definition(self, name: &str) -> Result<ServiceDefinition> {
        let command = match self.command {
            None => Vec::new(),
            Some(CommandField::List(args)) => args,
            Some(CommandField::Line(line)) => {
                line.split_whitespace().map(str::to_string).collect()
            }
        };

        let environment = match self.environment {
            None => Vec::new(),
            Some(EnvironmentField::List(entries)) => entries,
            Some(EnvironmentField::Map(map)) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let key = scalar_to_string(&key).ok_or_else(|| ComposeError::ConfigError {
                        message: format!("non-scalar environment key in service {name}"),
                    })?;
                    let value =
                        scalar_to_string(&value).ok_or_else(|| ComposeError::ConfigError {
                            message: format!(
                                "non-scalar environment value for {key} in service {name}"
                            ),
                        })?;
                    entries.push(format!("{key}={value}"));
                }
                entries
            }
        };

        let ports = self
            .ports
            .into_iter()
            .map(|port| match port {
                PortField::Number(n) => n.to_string(),
                PortField::Text(s) => s,
            })
            .collect();

        Ok(ServiceDefinition {
            image: self.image,
            command,
            cpu_shares: self.cpu_shares,
            mem_limit: self.mem_limit,
            environment,
            ports,
            restart: self.restart,
        })
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses a compose v1 manifest, preserving the declared service order.
/// Service name uniqueness is YAML's mapping-key guarantee.
pub fn parse(bytes: &[u8]) -> Result<Vec<(String, ServiceDefinition)>> {
    let doc: serde_yaml::Mapping = serde_yaml::from_slice(bytes)?;

    let mut services = Vec::with_capacity(doc.len());
    for (key, value) in doc {
        let name = key
            .as_str()
            .ok_or_else(|| ComposeError::ConfigError {
                message: format!("service name must be a string, got {key:?}"),
            })?
            .to_string();

        let raw: RawService = serde_yaml::from_value(value)?;
        let definition = raw.into_definition(&name)?;
        services.push((name, definition));
    }

    Ok(services)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_service_order() {
        let yaml = b"web:\n  image: nginx\ndb:\n  image: postgres\ncache:\n  image: redis\n";
        let services = parse(yaml).unwrap();

        let names: Vec<&str> = services.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["web", "db", "cache"]);
    }

    #[test]
    fn test_parse_string_command_splits_into_args() {
        let yaml = b"web:\n  image: nginx\n  command: nginx -g daemon;\n";
        let services = parse(yaml).unwrap();
        assert_eq!(services[0].1.command, vec!["nginx", "-g", "daemon;"]);
    }

    #[test]
    fn test_parse_list_command_kept_verbatim() {
        let yaml = b"web:\n  image: nginx\n  command: [nginx, -g, daemon off;]\n";
        let services = parse(yaml).unwrap();
        assert_eq!(services[0].1.command, vec!["nginx", "-g", "daemon off;"]);
    }

    #[test]
    fn test_parse_environment_map_form() {
        let yaml = b"web:\n  image: nginx\n  environment:\n    FOO: bar\n    PORT: 8080\n";
        let services = parse(yaml).unwrap();
        assert_eq!(services[0].1.environment, vec!["FOO=bar", "PORT=8080"]);
    }

    #[test]
    fn test_parse_numeric_and_string_ports() {
        let yaml = b"web:\n  image: nginx\n  ports:\n    - 80\n    - \"8080\"\n";
        let services = parse(yaml).unwrap();
        assert_eq!(services[0].1.ports, vec!["80", "8080"]);
    }

    #[test]
    fn test_parse_limits_and_restart() {
        let yaml =
            b"db:\n  image: postgres\n  cpu_shares: 2\n  mem_limit: 536870912\n  restart: \"no\"\n";
        let services = parse(yaml).unwrap();
        let def = &services[0].1;
        assert_eq!(def.cpu_shares, 2);
        assert_eq!(def.mem_limit, 536870912);
        assert_eq!(def.restart, "no");
    }

    #[test]
    fn test_parse_invalid_yaml_is_an_error() {
        assert!(parse(b"web: [unclosed").is_err());
    }
}
