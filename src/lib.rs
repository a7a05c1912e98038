pub mod compose;
pub mod config;
pub mod diff;
pub mod inspect;
pub mod processor;
pub mod render;

// Re-exports for easy access
pub use compose::ComposeService;
pub use config::CmdLine;
pub use config::ContainerRecord;
pub use config::HostConfig;
pub use config::ImageRecord;
pub use config::RuntimeConfig;
pub use diff::{reduce, ReducedConfig};
pub use inspect::DockerCli;
pub use inspect::Inspector;
pub use processor::{ContainerParser, OutputMode, RenderOptions};
