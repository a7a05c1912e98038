pub mod docker;
pub mod inspector;

pub use docker::DockerCli;
pub use inspector::Inspector;
