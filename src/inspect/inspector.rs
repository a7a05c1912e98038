use anyhow::Result;

use crate::config::{ContainerRecord, ImageRecord};

/// Seam over the container runtime's inspection facilities.
///
/// The core pipeline only ever talks to this trait; the production
/// implementation shells out to the `docker` binary, tests substitute
/// canned records.
pub trait Inspector {
    /// Resolve a container name or id to its full inspect record.
    fn inspect_container(&self, name: &str) -> Result<ContainerRecord>;

    /// Resolve an image reference to its inspect record.
    fn inspect_image(&self, reference: &str) -> Result<ImageRecord>;

    /// Names of all currently running containers, in daemon order.
    fn running_containers(&self) -> Result<Vec<String>>;
}
