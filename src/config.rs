use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level record returned by `docker inspect` for a container.
///
/// Only the fields the differencer consumes are modeled; everything else in
/// the inspect output is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Config")]
    pub config: RuntimeConfig,
    #[serde(default, rename = "HostConfig")]
    pub host_config: HostConfig,
}

impl ContainerRecord {
    /// Container name as users know it, without the leading `/` the daemon
    /// prepends.
    pub fn short_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }
}

/// Top-level record returned by `docker inspect` for an image.
///
/// Serves purely as the reference side of the diff; it is never rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, rename = "Config")]
    pub config: RuntimeConfig,
}

/// The `Config` object shared by container and image records.
///
/// Containers carry the effective runtime values; images carry the defaults
/// baked in at build time. Keys may be absent or `null` in either case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, rename = "Hostname")]
    pub hostname: String,
    #[serde(default, rename = "User")]
    pub user: String,
    #[serde(default, rename = "AttachStdout")]
    pub attach_stdout: bool,
    #[serde(default, rename = "OpenStdin")]
    pub open_stdin: bool,
    #[serde(default, rename = "Tty")]
    pub tty: bool,
    #[serde(default, rename = "Env")]
    pub env: Option<Vec<String>>,
    #[serde(default, rename = "Cmd")]
    pub cmd: Option<CmdLine>,
    #[serde(default, rename = "Entrypoint")]
    pub entrypoint: Option<CmdLine>,
    #[serde(default, rename = "Image")]
    pub image: String,
    #[serde(default, rename = "WorkingDir")]
    pub working_dir: String,
    #[serde(default, rename = "ExposedPorts")]
    pub exposed_ports: Option<BTreeMap<String, serde_json::Value>>,
}

/// The `HostConfig` object of a container record: host-side settings that
/// have no image-level counterpart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, rename = "Binds")]
    pub binds: Option<Vec<String>>,
    #[serde(default, rename = "PortBindings")]
    pub port_bindings: Option<BTreeMap<String, Option<Vec<HostBinding>>>>,
    #[serde(default, rename = "Devices")]
    pub devices: Option<Vec<String>>,
    #[serde(default, rename = "RestartPolicy")]
    pub restart_policy: Option<RestartPolicy>,
    #[serde(default, rename = "Privileged")]
    pub privileged: bool,
    #[serde(default, rename = "Dns")]
    pub dns: Option<Vec<String>>,
}

/// One host-side endpoint a container port is published on. Both segments
/// are optional in the daemon's output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostBinding {
    #[serde(default, rename = "HostIp")]
    pub host_ip: String,
    #[serde(default, rename = "HostPort")]
    pub host_port: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestartPolicy {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "MaximumRetryCount")]
    pub maximum_retry_count: i64,
}

/// `Cmd` and `Entrypoint` come back from the daemon either as a plain
/// string or as an argv list. The two shapes never compare equal, even for
/// a single-element list with the same content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CmdLine {
    Single(String),
    Multiple(Vec<String>),
}
