//! Container-vs-image configuration differencing.
//!
//! [`reduce`] takes a container record and the record of its base image and
//! keeps only what the container actually overrides: inherited image
//! defaults are suppressed, while host-side settings (binds, published
//! ports, restart policy, ...) have no image-level default and are always
//! surfaced when present.

use crate::config::{CmdLine, ContainerRecord, HostBinding, ImageRecord, RestartPolicy};

/// Sparse result of the diff. A field is populated only if the container
/// sets it to something the image does not already provide; renderers key
/// off presence, never off default values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReducedConfig {
    pub name: String,
    pub image: String,
    pub hostname: String,
    pub daemonized: bool,
    pub interactive: bool,
    pub tty: bool,
    pub volumes: Vec<String>,
    pub ports: Vec<String>,
    pub devices: Vec<String>,
    pub restart: Option<String>,
    pub privileged: bool,
    pub environment: Vec<String>,
    pub dns: Vec<String>,
    pub expose: Vec<String>,
    pub user: Option<String>,
    pub working_dir: Option<String>,
    pub entrypoint: Option<CmdLine>,
    pub command: Option<CmdLine>,
}

/// Diff a container's effective configuration against its image defaults.
pub fn reduce(container: &ContainerRecord, image: &ImageRecord) -> ReducedConfig {
    let conf = &container.config;
    let iconf = &image.config;
    let hconf = &container.host_config;

    let mut reduced = ReducedConfig {
        name: container.short_name().to_string(),
        image: conf.image.clone(),
        hostname: conf.hostname.clone(),
        daemonized: !conf.attach_stdout,
        interactive: conf.open_stdin,
        tty: conf.tty,
        privileged: hconf.privileged,
        ..Default::default()
    };

    // Env: exact-string membership against the image list, order preserved.
    // A variable whose key exists in the image but whose value differs is a
    // different string and therefore kept.
    let image_env: &[String] = iconf.env.as_deref().unwrap_or(&[]);
    if let Some(env) = &conf.env {
        reduced.environment = env
            .iter()
            .filter(|entry| !image_env.iter().any(|img| img == *entry))
            .cloned()
            .collect();
    }

    // Cmd and Entrypoint are compared structurally and kept whole; a string
    // never equals a single-element list with the same content
    if conf.cmd != iconf.cmd {
        reduced.command = conf.cmd.clone();
    }
    if conf.entrypoint != iconf.entrypoint {
        reduced.entrypoint = conf.entrypoint.clone();
    }

    if conf.working_dir != iconf.working_dir {
        reduced.working_dir = Some(conf.working_dir.clone());
    }

    if !conf.user.is_empty() && conf.user != iconf.user {
        reduced.user = Some(conf.user.clone());
    }

    // Exposed ports are additive: a port can be introduced at the container
    // level but never modified
    if let Some(ports) = &conf.exposed_ports {
        let image_ports = iconf.exposed_ports.as_ref();
        reduced.expose = ports
            .keys()
            .filter(|port| !image_ports.map_or(false, |m| m.contains_key(*port)))
            .cloned()
            .collect();
    }

    // Everything below lives in HostConfig only, so there is nothing to
    // diff against; surface verbatim when non-empty
    if let Some(binds) = &hconf.binds {
        reduced.volumes = binds.clone();
    }

    if let Some(bindings) = &hconf.port_bindings {
        for (port, hosts) in bindings {
            for host in hosts.as_deref().unwrap_or(&[]) {
                reduced.ports.push(format_port_binding(port, host));
            }
        }
    }

    if let Some(devices) = &hconf.devices {
        reduced.devices = devices.clone();
    }

    if let Some(dns) = &hconf.dns {
        reduced.dns = dns.clone();
    }

    reduced.restart = hconf.restart_policy.as_ref().and_then(restart_string);

    reduced
}

/// `[hostIp:][hostPort:]containerPort`, omitting empty segments.
fn format_port_binding(container_port: &str, host: &HostBinding) -> String {
    let mut binding = String::new();
    if !host.host_ip.is_empty() {
        binding.push_str(&host.host_ip);
        binding.push(':');
    }
    if !host.host_port.is_empty() {
        binding.push_str(&host.host_port);
        binding.push(':');
    }
    binding.push_str(container_port);
    binding
}

/// `name:count` when a positive retry bound is set, plain `name` otherwise;
/// an unnamed policy is suppressed.
fn restart_string(policy: &RestartPolicy) -> Option<String> {
    if policy.name.is_empty() {
        return None;
    }
    if policy.maximum_retry_count > 0 {
        Some(format!("{}:{}", policy.name, policy.maximum_retry_count))
    } else {
        Some(policy.name.clone())
    }
}
