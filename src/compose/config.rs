//! Compose service configuration types

use serde::Deserialize;

/// One service declared in a compose file.
///
/// Unknown keys are ignored; dockerfile, domainname, and extends are not
/// supported. List-valued fields keep their declared entry order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Service name, taken from the top-level mapping key
    #[serde(skip)]
    pub name: String,
    /// Build context path
    #[serde(default)]
    pub build: Option<String>,
    /// Capabilities to add
    #[serde(default)]
    pub cap_add: Vec<String>,
    /// Capabilities to drop
    #[serde(default)]
    pub cap_drop: Vec<String>,
    /// Command passed to the container
    #[serde(default)]
    pub command: Option<String>,
    /// CPUs in which to allow execution
    #[serde(default)]
    pub cpuset: Option<String>,
    /// CPU shares (relative weight)
    #[serde(default)]
    pub cpu_shares: Option<String>,
    /// Host devices to expose
    #[serde(default)]
    pub devices: Vec<String>,
    /// Custom DNS servers
    #[serde(default)]
    pub dns: Vec<String>,
    /// Custom DNS search domains
    #[serde(default)]
    pub dns_search: Vec<String>,
    /// Entrypoint override
    #[serde(default)]
    pub entrypoint: Option<String>,
    /// Files to read environment variables from
    #[serde(default)]
    pub env_file: Vec<String>,
    /// Environment variables
    #[serde(default)]
    pub environment: Vec<String>,
    /// Ports exposed without publishing to the host
    #[serde(default)]
    pub expose: Vec<String>,
    /// Links to containers outside this file
    #[serde(default)]
    pub external_links: Vec<String>,
    /// Hostname mappings to add to the container
    #[serde(default)]
    pub extra_hosts: Vec<String>,
    /// Hostname
    #[serde(default)]
    pub hostname: Option<String>,
    /// Image name
    #[serde(default)]
    pub image: Option<String>,
    /// Container metadata labels
    #[serde(default)]
    pub labels: Vec<String>,
    /// Links to services in this file
    #[serde(default)]
    pub links: Vec<String>,
    /// Logging driver
    #[serde(default)]
    pub log_driver: Option<String>,
    /// Memory limit
    #[serde(default)]
    pub mem_limit: Option<String>,
    /// Network mode
    #[serde(default)]
    pub net: Option<String>,
    /// PID mode
    #[serde(default)]
    pub pid: Option<String>,
    /// Ports published to the host
    #[serde(default)]
    pub ports: Vec<String>,
    /// Privileged mode
    #[serde(default)]
    pub privileged: bool,
    /// Read-only root filesystem
    #[serde(default)]
    pub read_only: bool,
    /// Restart policy
    #[serde(default)]
    pub restart: Option<String>,
    /// Security options
    #[serde(default)]
    pub security_opt: Vec<String>,
    /// Keep stdin open
    #[serde(default)]
    pub stdin_open: bool,
    /// Allocate a pseudo-TTY
    #[serde(default)]
    pub tty: bool,
    /// User
    #[serde(default)]
    pub user: Option<String>,
    /// Volume mounts
    #[serde(default)]
    pub volumes: Vec<String>,
    /// Services to mount volumes from
    #[serde(default)]
    pub volumes_from: Vec<String>,
    /// Working directory
    #[serde(default)]
    pub working_dir: Option<String>,
}

impl ServiceConfig {
    /// Whether the service declares a non-empty build context
    pub fn has_build(&self) -> bool {
        self.build.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Whether the service declares a non-empty image reference
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.is_empty())
    }
}
