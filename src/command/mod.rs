//! Docker command synthesis
//!
//! Turns one parsed service into the `docker build` / `docker run` command
//! strings that recreate it.

use crate::compose::config::ServiceConfig;

/// Container runtime command name
const RUNTIME: &str = "docker";

/// Settings applied to every rendered service
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// String inserted before container names
    pub prefix: String,
    /// Emit run commands with the detach flag
    pub detach: bool,
    /// Emit run commands with the remove flag
    pub remove: bool,
}

impl RenderContext {
    /// Render the docker commands that recreate a service
    ///
    /// Always produces one `docker run` line. If the service specifies
    /// build, a `docker build` line comes first and the run line uses the
    /// image tagged by the build, which is the service's own unprefixed
    /// name.
    pub fn render(&self, service: &ServiceConfig) -> String {
        let mut lines = Vec::with_capacity(2);

        // docker build [options] path
        let image = match service.build.as_deref().filter(|b| !b.is_empty()) {
            Some(build) => {
                lines.push(format!("{} build --tag {} {}", RUNTIME, service.name, build));
                service.name.clone()
            }
            None => service.image.clone().unwrap_or_default(),
        };

        // docker run [options] image [command]
        // Options are emitted in a fixed order so output is stable across
        // runs on the same input.
        let mut tokens = vec![RUNTIME.to_string(), "run".to_string()];

        if !service.name.is_empty() {
            tokens.push(format!("--name={}{}", self.prefix, service.name));
        }
        push_list(&mut tokens, "cap-add", &service.cap_add);
        push_list(&mut tokens, "cap-drop", &service.cap_drop);
        push_scalar(&mut tokens, "cpuset-cpus", &service.cpuset);
        push_scalar(&mut tokens, "cpu-shares", &service.cpu_shares);
        push_flag(&mut tokens, "detach", self.detach);
        push_list(&mut tokens, "device", &service.devices);
        push_list(&mut tokens, "dns", &service.dns);
        push_list(&mut tokens, "dns-search", &service.dns_search);
        push_scalar(&mut tokens, "entrypoint", &service.entrypoint);
        push_list(&mut tokens, "env-file", &service.env_file);
        push_list(&mut tokens, "env", &service.environment);
        // expose entries are emitted with the env flag
        push_list(&mut tokens, "env", &service.expose);
        push_list(&mut tokens, "link", &service.external_links);
        push_list(&mut tokens, "add-host", &service.extra_hosts);
        push_scalar(&mut tokens, "hostname", &service.hostname);
        push_list(&mut tokens, "label", &service.labels);
        self.push_prefixed(&mut tokens, "link", &service.links);
        push_scalar(&mut tokens, "log-driver", &service.log_driver);
        push_scalar(&mut tokens, "memory", &service.mem_limit);
        push_scalar(&mut tokens, "net", &service.net);
        push_scalar(&mut tokens, "pid", &service.pid);
        push_list(&mut tokens, "publish", &service.ports);
        push_flag(&mut tokens, "privileged", service.privileged);
        push_flag(&mut tokens, "read-only", service.read_only);
        push_flag(&mut tokens, "rm", self.remove);
        push_scalar(&mut tokens, "restart", &service.restart);
        push_list(&mut tokens, "security-opt", &service.security_opt);
        push_flag(&mut tokens, "interactive", service.stdin_open);
        push_flag(&mut tokens, "tty", service.tty);
        push_scalar(&mut tokens, "user", &service.user);
        push_list(&mut tokens, "volume", &service.volumes);
        self.push_prefixed(&mut tokens, "volumes-from", &service.volumes_from);
        push_scalar(&mut tokens, "workdir", &service.working_dir);

        if !image.is_empty() {
            tokens.push(image);
        }
        if let Some(command) = service.command.as_deref().filter(|c| !c.is_empty()) {
            tokens.push(command.to_string());
        }

        lines.push(tokens.join(" "));
        lines.join("\n")
    }

    /// Emit one option per entry, with the name prefix applied
    ///
    /// Used for references that name another service in the same file.
    fn push_prefixed(&self, tokens: &mut Vec<String>, flag: &str, values: &[String]) {
        for value in values {
            tokens.push(format!("--{}={}{}", flag, self.prefix, value));
        }
    }
}

/// Emit `--flag=value` when the value is present and non-empty
fn push_scalar(tokens: &mut Vec<String>, flag: &str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            tokens.push(format!("--{}={}", flag, value));
        }
    }
}

/// Emit a bare `--flag` when enabled
fn push_flag(tokens: &mut Vec<String>, flag: &str, enabled: bool) {
    if enabled {
        tokens.push(format!("--{}", flag));
    }
}

/// Emit one `--flag=value` per entry, in entry order
fn push_list(tokens: &mut Vec<String>, flag: &str, values: &[String]) {
    for value in values {
        tokens.push(format!("--{}={}", flag, value));
    }
}
