//! Environment list reconciliation for a container.

use super::{ContainerIndex, ENVIRONMENT, EnvPair, TaskDefinition};
use super::{parse_env_block, parse_name_list};
use crate::env::EnvLookup;
use crate::error::{RenderError, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

impl TaskDefinition {
    /// Copy the named variables from the ambient environment into the container.
    ///
    /// Existing entries whose name is requested get the ambient value in place;
    /// every requested name never matched is appended afterwards, in request
    /// order. Each requested occurrence consumes one existing entry, so a
    /// duplicated existing name is only overwritten once per request.
    ///
    /// A requested variable missing from the ambient environment is stored
    /// with an empty value.
    pub fn override_from_env(
        &mut self,
        index: ContainerIndex,
        names: &str,
        env: &dyn EnvLookup,
    ) -> Result<()> {
        let mut pending = parse_name_list(names);
        if pending.is_empty() {
            return Ok(());
        }

        let container = self.container_mut(index)?;
        let existing = take_environment(container);
        let mut rebuilt = Vec::with_capacity(existing.len() + pending.len());

        for mut entry in existing {
            let matched = entry_name(&entry).and_then(|n| pending.iter().position(|p| *p == n));
            if let Some(pos) = matched {
                let name = pending.remove(pos);
                set_entry_value(&mut entry, ambient_value(env, name));
                debug!(name, "overwrote environment variable from process environment");
            }
            rebuilt.push(entry);
        }

        for name in pending {
            debug!(name, "appended environment variable from process environment");
            rebuilt.push(entry_value(&EnvPair::new(name, ambient_value(env, name)))?);
        }

        container.insert(ENVIRONMENT.to_string(), Value::Array(rebuilt));
        Ok(())
    }

    /// Merge a block of `NAME=value` lines into the container's environment.
    ///
    /// The block is parsed in full before anything changes. Each pair then
    /// overwrites the first entry with the same name or is appended, so later
    /// lines see entries added by earlier ones.
    ///
    /// Any non-empty block, even one holding only blank lines, gives the
    /// container an `environment` array. An empty block is a no-op.
    pub fn merge_env_block(&mut self, index: ContainerIndex, block: &str) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }
        let pairs = parse_env_block(block)?;

        let container = self.container_mut(index)?;
        let mut entries = take_environment(container);

        for pair in pairs {
            match entries
                .iter_mut()
                .find(|e| entry_name(e) == Some(pair.name.as_str()))
            {
                Some(entry) => {
                    debug!(name = %pair.name, "overwrote environment variable");
                    set_entry_value(entry, pair.value);
                }
                None => {
                    debug!(name = %pair.name, "appended environment variable");
                    entries.push(entry_value(&pair)?);
                }
            }
        }

        container.insert(ENVIRONMENT.to_string(), Value::Array(entries));
        Ok(())
    }

    /// The container's environment as name/value pairs.
    ///
    /// Entries without a string `name` are skipped; a non-string `value`
    /// is rendered as its JSON text.
    pub fn environment(&self, index: ContainerIndex) -> Vec<EnvPair> {
        let Some(entries) = self
            .container(index)
            .and_then(|c| c.get(ENVIRONMENT))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| {
                let name = entry_name(entry)?;
                let value = match entry.get("value") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                };
                Some(EnvPair::new(name, value))
            })
            .collect()
    }
}

/// Move the environment list out of the container.
///
/// The slot is left as `null` rather than removed so that the key keeps its
/// position when the list is put back. A missing or non-array environment
/// yields an empty list.
fn take_environment(container: &mut Map<String, Value>) -> Vec<Value> {
    match container.get_mut(ENVIRONMENT).map(Value::take) {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    }
}

fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

fn set_entry_value(entry: &mut Value, value: String) {
    if let Some(fields) = entry.as_object_mut() {
        fields.insert("value".to_string(), Value::String(value));
    }
}

fn entry_value(pair: &EnvPair) -> Result<Value> {
    serde_json::to_value(pair).map_err(|e| {
        RenderError::ParseError(format!(
            "failed to serialize environment variable '{}': {}",
            pair.name, e
        ))
    })
}

fn ambient_value(env: &dyn EnvLookup, name: &str) -> String {
    env.var(name).unwrap_or_else(|| {
        warn!(name, "requested variable is not set; using an empty value");
        String::new()
    })
}
