//! Compose file parser

use super::config::ServiceConfig;
use crate::error::{Result, UncomposeError};
use serde_yaml::Mapping;
use std::path::{Component, Path, PathBuf};

/// Default compose file names
pub const DEFAULT_COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Compose file parser
pub struct ComposeParser;

impl ComposeParser {
    /// Find compose file in directory
    pub fn find_compose_file(dir: &Path) -> Option<PathBuf> {
        for name in DEFAULT_COMPOSE_FILES {
            let path = dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Parse compose file from path
    ///
    /// Relative volume host paths are resolved against the current working
    /// directory.
    pub fn parse_file(path: &Path) -> Result<Vec<ServiceConfig>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            UncomposeError::ComposeParse(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let base = std::env::current_dir()?;

        Self::parse_str(&content, &base)
    }

    /// Parse compose file from string
    ///
    /// The top level must be a mapping from service name to service fields.
    /// Services are returned in declaration order. Relative volume host
    /// paths are resolved against `base`.
    pub fn parse_str(content: &str, base: &Path) -> Result<Vec<ServiceConfig>> {
        // serde_yaml mappings keep insertion order, so a single pass over
        // the document recovers the declaration order.
        let doc: Mapping = serde_yaml::from_str(content)
            .map_err(|e| UncomposeError::ComposeParse(format!("Failed to parse YAML: {}", e)))?;

        let mut services = Vec::with_capacity(doc.len());
        for (key, value) in doc {
            let name = key
                .as_str()
                .ok_or_else(|| {
                    UncomposeError::ComposeParse(format!(
                        "Service name must be a string, got: {:?}",
                        key
                    ))
                })?
                .to_string();

            let mut service: ServiceConfig = serde_yaml::from_value(value)
                .map_err(|e| UncomposeError::ComposeParse(format!("Service '{}': {}", name, e)))?;
            service.name = name;

            Self::validate(&service)?;
            Self::normalize_volumes(&mut service, base);
            services.push(service);
        }

        Ok(services)
    }

    /// Validate one service configuration
    fn validate(service: &ServiceConfig) -> Result<()> {
        // Service must have either image or build
        if !service.has_build() && !service.has_image() {
            return Err(UncomposeError::InvalidConfig(format!(
                "Service '{}' must have either 'image' or 'build' specified",
                service.name
            )));
        }

        Ok(())
    }

    /// Resolve volume host paths to absolute paths
    ///
    /// Entries without a colon name a container-internal path and are left
    /// untouched. For `host:container[:options]` entries, the host segment
    /// is resolved against `base`; the remaining segments are preserved.
    fn normalize_volumes(service: &mut ServiceConfig, base: &Path) {
        for volume in &mut service.volumes {
            // /var/lib/mysql
            if !volume.contains(':') {
                continue;
            }

            // cache/:/tmp/cache:ro
            let mut segments: Vec<String> = volume.split(':').map(str::to_string).collect();
            segments[0] = absolutize(base, &segments[0]).display().to_string();
            *volume = segments.join(":");
        }
    }
}

/// Resolve a path against a base directory, lexically
///
/// `.` and `..` components are removed without consulting the filesystem.
fn absolutize(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            _ => resolved.push(component),
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_declaration_order() {
        let yaml = r#"
one:
  image: image1
two:
  image: image2
three:
  image: image3
four:
  image: image4
five:
  image: image5
six:
  image: image6
seven:
  image: image7
eight:
  image: image8
nine:
  image: image9
ten:
  image: image10
"#;

        let services = ComposeParser::parse_str(yaml, Path::new("/work")).unwrap();
        let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"
            ]
        );

        for (i, service) in services.iter().enumerate() {
            assert_eq!(service.image.as_deref(), Some(format!("image{}", i + 1).as_str()));
        }
    }

    #[test]
    fn test_missing_image_and_build() {
        let yaml = r#"
web:
  ports:
    - "80:80"
"#;

        let err = ComposeParser::parse_str(yaml, Path::new("/work")).unwrap_err();
        assert!(matches!(err, UncomposeError::InvalidConfig(_)));
        assert!(err.to_string().contains("web"));
    }

    #[test]
    fn test_volume_host_paths_resolved() {
        let yaml = r#"
db:
  image: mysql
  volumes:
    - /var/lib/mysql
    - cache/:/tmp/cache:ro
    - ./logs:/var/log
"#;

        let services = ComposeParser::parse_str(yaml, Path::new("/work")).unwrap();
        assert_eq!(
            services[0].volumes,
            [
                "/var/lib/mysql",
                "/work/cache:/tmp/cache:ro",
                "/work/logs:/var/log"
            ]
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let yaml = r#"
web:
  image: nginx
  dockerfile: Dockerfile.web
  extends: base
"#;

        let services = ComposeParser::parse_str(yaml, Path::new("/work")).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].image.as_deref(), Some("nginx"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ComposeParser::parse_str("not: [valid", Path::new("/work")).unwrap_err();
        assert!(matches!(err, UncomposeError::ComposeParse(_)));
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docker-compose.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "web:\n  image: nginx\ndb:\n  image: postgres").unwrap();

        let services = ComposeParser::parse_file(&path).unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "web");
        assert_eq!(services[1].name, "db");
    }

    #[test]
    fn test_parse_file_unreadable() {
        let err = ComposeParser::parse_file(Path::new("/no/such/compose.yml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/compose.yml"));
    }

    #[test]
    fn test_find_compose_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ComposeParser::find_compose_file(dir.path()), None);

        std::fs::write(dir.path().join("docker-compose.yml"), "").unwrap();
        assert_eq!(
            ComposeParser::find_compose_file(dir.path()),
            Some(dir.path().join("docker-compose.yml"))
        );
    }

    #[test]
    fn test_absolutize() {
        let base = Path::new("/work");
        assert_eq!(absolutize(base, "cache/"), PathBuf::from("/work/cache"));
        assert_eq!(absolutize(base, "./a/../b"), PathBuf::from("/work/b"));
        assert_eq!(absolutize(base, "/var/lib"), PathBuf::from("/var/lib"));
        assert_eq!(absolutize(base, "~/configs"), PathBuf::from("/work/~/configs"));
    }
}
