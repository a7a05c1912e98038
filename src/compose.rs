//! Rendering of a [`ReducedConfig`] into a docker-compose service fragment.
//!
//! The document is keyed by container name and only carries keys whose
//! reduced value is non-empty. Unlike the run-command renderer nothing is
//! shell-escaped here: YAML quotes structurally.

use crate::config::CmdLine;
use crate::diff::ReducedConfig;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// One service entry of a compose document. Optional keys are skipped
/// during serialization rather than emitted with empty values.
#[derive(Debug, Serialize)]
pub struct ComposeService {
    container_name: String,
    image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    volumes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    devices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    restart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    privileged: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    environment: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    expose: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entrypoint: Option<CmdLine>,
}

impl ComposeService {
    pub fn from_reduced(reduced: &ReducedConfig) -> Self {
        // An empty argv entrypoint carries no information; a string-form
        // entrypoint is kept whatever its content
        let entrypoint = match &reduced.entrypoint {
            Some(CmdLine::Multiple(values)) if values.is_empty() => None,
            other => other.clone(),
        };

        Self {
            container_name: reduced.name.clone(),
            image: reduced.image.clone(),
            volumes: reduced.volumes.clone(),
            ports: reduced.ports.clone(),
            devices: reduced.devices.clone(),
            restart: reduced.restart.clone(),
            privileged: reduced.privileged.then_some(true),
            environment: reduced.environment.clone(),
            dns: reduced.dns.clone(),
            expose: reduced.expose.clone(),
            user: reduced.user.clone(),
            working_dir: reduced.working_dir.clone(),
            entrypoint,
        }
    }
}

/// Serialize the service as a block-style YAML document keyed by container
/// name.
pub fn render_service(reduced: &ReducedConfig) -> Result<String> {
    let mut document = BTreeMap::new();
    document.insert(reduced.name.clone(), ComposeService::from_reduced(reduced));
    Ok(serde_yaml::to_string(&document)?)
}

/// Write one container's service fragment followed by a blank line.
pub fn write_service(reduced: &ReducedConfig, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", render_service(reduced)?)?;
    writeln!(out)?;
    Ok(())
}
