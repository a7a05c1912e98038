use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::process::Command;

use super::Inspector;
use crate::config::{ContainerRecord, ImageRecord};

/// Docker implementation of the Inspector trait
pub struct DockerCli;

impl DockerCli {
    pub fn new() -> Result<Self> {
        let output = Command::new("docker")
            .arg("--version")
            .output()
            .context("Failed to execute docker command. Is Docker installed and running?")?;

        if !output.status.success() {
            return Err(anyhow!("Docker is not available"));
        }

        Ok(Self)
    }

    fn run_command(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("docker")
            .args(args)
            .output()
            .context(format!("Failed to execute docker command: {:?}", args))?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Docker command failed: {}", error));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        Ok(stdout)
    }

    // `docker inspect` always answers with a JSON array, one element per
    // queried object
    fn inspect_one<T: DeserializeOwned>(&self, kind: &str, name: &str) -> Result<T> {
        let stdout = self.run_command(&["inspect", "--type", kind, name])?;

        let mut records: Vec<T> = serde_json::from_str(&stdout)
            .context(format!("Failed to parse inspect output for {} {}", kind, name))?;

        if records.len() != 1 {
            return Err(anyhow!(
                "Expected one {} record for {}, got {}",
                kind,
                name,
                records.len()
            ));
        }

        Ok(records.remove(0))
    }
}

impl Inspector for DockerCli {
    fn inspect_container(&self, name: &str) -> Result<ContainerRecord> {
        debug!("Inspecting container: {}", name);
        self.inspect_one("container", name)
    }

    fn inspect_image(&self, reference: &str) -> Result<ImageRecord> {
        debug!("Inspecting image: {}", reference);
        self.inspect_one("image", reference)
    }

    fn running_containers(&self) -> Result<Vec<String>> {
        let stdout = self.run_command(&["ps", "--format", "{{.Names}}"])?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
