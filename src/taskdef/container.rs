//! Container lookup and image patching.

use super::{CONTAINER_DEFINITIONS, ContainerIndex, IMAGE, TaskDefinition};
use crate::error::{RenderError, Result};
use serde_json::{Map, Value};

impl TaskDefinition {
    /// Find the first container definition whose `name` equals `name` exactly.
    ///
    /// # Returns
    ///
    /// * `Ok(ContainerIndex)` - Position of the first match
    /// * `Err(RenderError::InvalidFormat)` - `containerDefinitions` missing or not an array
    /// * `Err(RenderError::NotFound)` - No container has that name
    pub fn find_container(&self, name: &str) -> Result<ContainerIndex> {
        let containers = self
            .document
            .get(CONTAINER_DEFINITIONS)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                RenderError::InvalidFormat(
                    "Invalid task definition format: containerDefinitions section is not present or is not an array"
                        .to_string(),
                )
            })?;

        containers
            .iter()
            .position(|c| c.get("name").and_then(Value::as_str) == Some(name))
            .map(ContainerIndex)
            .ok_or_else(|| {
                RenderError::NotFound(
                    "Invalid task definition: Could not find container definition with matching name"
                        .to_string(),
                )
            })
    }

    /// Point the container at a new image, replacing any previous value.
    pub fn set_image(&mut self, index: ContainerIndex, image: &str) -> Result<()> {
        let container = self.container_mut(index)?;
        container.insert(IMAGE.to_string(), Value::String(image.to_string()));
        Ok(())
    }

    /// The container definition object at `index`.
    pub fn container(&self, index: ContainerIndex) -> Option<&Map<String, Value>> {
        self.document
            .get(CONTAINER_DEFINITIONS)
            .and_then(Value::as_array)
            .and_then(|c| c.get(index.0))
            .and_then(Value::as_object)
    }

    pub(super) fn container_mut(
        &mut self,
        index: ContainerIndex,
    ) -> Result<&mut Map<String, Value>> {
        self.document
            .get_mut(CONTAINER_DEFINITIONS)
            .and_then(Value::as_array_mut)
            .and_then(|c| c.get_mut(index.0))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                RenderError::InvalidFormat(format!(
                    "container definition at position {} is not an object",
                    index.0
                ))
            })
    }
}
