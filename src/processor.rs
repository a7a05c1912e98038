//! Per-container orchestration: inspect → reduce → render.
//!
//! [`ContainerParser`] drives the whole pipeline for a concrete
//! [`Inspector`]. Containers are processed strictly in order, each block is
//! streamed to the output sink as soon as it is rendered, and the first
//! inspection failure aborts the run; there is no partial-failure
//! continuation.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use crate::compose;
use crate::diff;
use crate::inspect::Inspector;
use crate::render;

/// Target format for a container's output block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Command,
    Compose,
}

/// Immutable rendering options injected at startup.
#[derive(Debug, Copy, Clone)]
pub struct RenderOptions {
    pub mode: OutputMode,
    pub pretty: bool,
}

/// Orchestrates reconstruction for a concrete [`Inspector`].
///
/// The parser has no state beyond the injected inspector and options;
/// reuse it across any number of containers.
pub struct ContainerParser<I: Inspector> {
    inspector: I,
    options: RenderOptions,
}

impl<I: Inspector> ContainerParser<I> {
    pub fn new(inspector: I, options: RenderOptions) -> Self {
        Self { inspector, options }
    }

    /// Process each named container in order, writing one output block per
    /// container to `out`. With no names given, the running set is
    /// discovered and processed in daemon order.
    pub fn run(&self, containers: &[String], out: &mut dyn Write) -> Result<()> {
        let names = if containers.is_empty() {
            info!("No containers given, discovering running containers");
            self.inspector.running_containers()?
        } else {
            containers.to_vec()
        };

        debug!("Processing {} container(s)", names.len());

        for name in &names {
            info!("Inspecting container: {}", name);
            let container = self.inspector.inspect_container(name)?;

            // The image record is the reference side of the diff
            let image = self
                .inspector
                .inspect_image(&container.config.image)
                .context(format!("Failed to inspect image of container {}", name))?;

            let reduced = diff::reduce(&container, &image);

            match self.options.mode {
                OutputMode::Command => render::write_command(&reduced, self.options.pretty, out)?,
                OutputMode::Compose => compose::write_service(&reduced, out)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContainerRecord, ImageRecord, RuntimeConfig};
    use anyhow::anyhow;

    struct MockInspector {
        containers: Vec<(String, String)>, // (name, image)
        fail_on: Option<String>,
    }

    impl Inspector for MockInspector {
        fn inspect_container(&self, name: &str) -> Result<ContainerRecord> {
            if self.fail_on.as_deref() == Some(name) {
                return Err(anyhow!("No such container: {}", name));
            }
            let image = self
                .containers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, image)| image.clone())
                .ok_or_else(|| anyhow!("No such container: {}", name))?;

            Ok(ContainerRecord {
                name: format!("/{}", name),
                config: RuntimeConfig {
                    hostname: name.to_string(),
                    image,
                    ..Default::default()
                },
                host_config: Default::default(),
            })
        }

        fn inspect_image(&self, _reference: &str) -> Result<ImageRecord> {
            Ok(ImageRecord {
                config: RuntimeConfig::default(),
            })
        }

        fn running_containers(&self) -> Result<Vec<String>> {
            Ok(self.containers.iter().map(|(n, _)| n.clone()).collect())
        }
    }

    fn options() -> RenderOptions {
        RenderOptions {
            mode: OutputMode::Command,
            pretty: false,
        }
    }

    #[test]
    fn test_discovers_running_containers_when_none_given() {
        let inspector = MockInspector {
            containers: vec![
                ("web".to_string(), "nginx:latest".to_string()),
                ("db".to_string(), "postgres:16".to_string()),
            ],
            fail_on: None,
        };
        let parser = ContainerParser::new(inspector, options());

        let mut out = Vec::new();
        parser.run(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("# docker-run command for web"));
        assert!(text.contains("# docker-run command for db"));
        // One block per container, each closed by a blank line
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_explicit_arguments_override_discovery() {
        let inspector = MockInspector {
            containers: vec![
                ("web".to_string(), "nginx:latest".to_string()),
                ("db".to_string(), "postgres:16".to_string()),
            ],
            fail_on: None,
        };
        let parser = ContainerParser::new(inspector, options());

        let mut out = Vec::new();
        parser.run(&["db".to_string()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("for db"));
        assert!(!text.contains("for web"));
    }

    #[test]
    fn test_first_failure_aborts_the_run() {
        let inspector = MockInspector {
            containers: vec![
                ("web".to_string(), "nginx:latest".to_string()),
                ("db".to_string(), "postgres:16".to_string()),
            ],
            fail_on: Some("web".to_string()),
        };
        let parser = ContainerParser::new(inspector, options());

        let mut out = Vec::new();
        let result = parser.run(&["web".to_string(), "db".to_string()], &mut out);

        assert!(result.is_err());
        // Nothing was emitted for the container after the failure
        assert!(!String::from_utf8(out).unwrap().contains("for db"));
    }
}
