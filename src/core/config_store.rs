use crate::core::filesystem::{load_json, store_json, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const MO_MAX_JSON_CAPACITY: usize = 4096;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigStoreError {
    #[error("configuration variable {0:?} not found")]
    #[diagnostic()]
    NotFound(VariableKey),

    #[error("configuration variable {0:?} redeclared with a different type")]
    #[diagnostic()]
    TypeConflict(VariableKey),

    #[error("type mismatch reading {0:?}")]
    #[diagnostic()]
    TypeMismatch(VariableKey),

    #[error("configuration variable {0:?} is read-only")]
    #[diagnostic()]
    ReadOnly(VariableKey),

    #[error("value rejected by validator for {0:?}")]
    #[diagnostic()]
    ValidationFailed(VariableKey),

    #[error(transparent)]
    #[diagnostic()]
    Filesystem(#[from] FilesystemError),
}

impl CoreError for ConfigStoreError {
    fn to_call_error(&self) -> (&'static str, String) {
        match self {
            ConfigStoreError::NotFound(_) => ("NotSupported", self.to_string()),
            ConfigStoreError::ReadOnly(_) | ConfigStoreError::ValidationFailed(_) => {
                ("PropertyConstraintViolation", self.to_string())
            }
            ConfigStoreError::TypeMismatch(_) | ConfigStoreError::TypeConflict(_) => {
                ("FormationViolation", self.to_string())
            }
            ConfigStoreError::Filesystem(_) => ("InternalError", self.to_string()),
        }
    }
}

/// Identifies a configuration variable: a component tag plus a name for
/// v2.0.1, or just a name for v1.6 (`component = None`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableKey {
    pub component: Option<String>,
    pub name: String,
}

impl VariableKey {
    pub fn v16(name: impl Into<String>) -> Self {
        Self {
            component: None,
            name: name.into(),
        }
    }

    pub fn v201(component: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ConfigValue {
    Int(i32),
    Bool(bool),
    Str(String),
}

impl ConfigValue {
    fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Str(_) => ValueKind::Str,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Int,
    Bool,
    Str,
}

type Validator = Box<dyn Fn(&ConfigValue) -> bool + Send + Sync>;

struct Entry {
    value: ConfigValue,
    persistent: bool,
    readonly: bool,
    reboot_required: bool,
    write_revision: u64,
    value_revision: u64,
}

/// An opaque alias for a declared configuration variable. Two `declare()`
/// calls for the same key yield handles that read/write the same entry.
#[derive(Debug, Clone, Copy)]
pub struct VariableHandle {
    index: usize,
    kind: ValueKind,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclareOptions {
    pub persistent: bool,
    pub readonly: bool,
    pub reboot_required: bool,
}

#[derive(Serialize, Deserialize)]
struct PersistedEntry {
    key: VariableKey,
    value: ConfigValue,
    readonly: bool,
    reboot_required: bool,
    write_revision: u64,
    value_revision: u64,
}

#[derive(Serialize, Deserialize)]
struct PersistedContainer {
    content_type: String,
    version: u32,
    entries: Vec<PersistedEntry>,
}

/// Typed, persisted key-value registry with revision tracking (C3). Every
/// other component parameterizes its behavior through variables declared
/// here.
#[derive(Default)]
pub struct ConfigStore {
    keys: HashMap<VariableKey, usize>,
    entries: Vec<Entry>,
    validators: HashMap<VariableKey, Vec<Validator>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent per key: the first call creates the entry at `default`;
    /// subsequent calls for the same key must agree on type, and return a
    /// handle aliasing the original entry.
    pub fn declare(
        &mut self,
        key: VariableKey,
        default: ConfigValue,
        opts: DeclareOptions,
    ) -> Result<VariableHandle, ConfigStoreError> {
        let kind = default.kind();
        if let Some(&index) = self.keys.get(&key) {
            let existing = &self.entries[index];
            if existing.value.kind() != kind {
                return Err(ConfigStoreError::TypeConflict(key));
            }
            return Ok(VariableHandle { index, kind });
        }

        let index = self.entries.len();
        self.entries.push(Entry {
            value: default,
            persistent: opts.persistent,
            readonly: opts.readonly,
            reboot_required: opts.reboot_required,
            write_revision: 0,
            value_revision: 0,
        });
        self.keys.insert(key, index);
        Ok(VariableHandle { index, kind })
    }

    pub fn register_validator(
        &mut self,
        key: VariableKey,
        predicate: impl Fn(&ConfigValue) -> bool + Send + Sync + 'static,
    ) {
        self.validators
            .entry(key)
            .or_default()
            .push(Box::new(predicate));
    }

    fn key_for(&self, index: usize) -> VariableKey {
        self.keys
            .iter()
            .find(|(_, &i)| i == index)
            .map(|(k, _)| k.clone())
            .expect("handle index always has a corresponding key")
    }

    pub fn get_int(&self, handle: VariableHandle) -> Result<i32, ConfigStoreError> {
        match &self.entries[handle.index].value {
            ConfigValue::Int(v) => Ok(*v),
            _ => Err(ConfigStoreError::TypeMismatch(self.key_for(handle.index))),
        }
    }

    pub fn get_bool(&self, handle: VariableHandle) -> Result<bool, ConfigStoreError> {
        match &self.entries[handle.index].value {
            ConfigValue::Bool(v) => Ok(*v),
            _ => Err(ConfigStoreError::TypeMismatch(self.key_for(handle.index))),
        }
    }

    pub fn get_str(&self, handle: VariableHandle) -> Result<String, ConfigStoreError> {
        match &self.entries[handle.index].value {
            ConfigValue::Str(v) => Ok(v.clone()),
            _ => Err(ConfigStoreError::TypeMismatch(self.key_for(handle.index))),
        }
    }

    pub fn value_revision(&self, handle: VariableHandle) -> u64 {
        self.entries[handle.index].value_revision
    }

    pub fn write_revision(&self, handle: VariableHandle) -> u64 {
        self.entries[handle.index].write_revision
    }

    /// Internal mutation, e.g. by another component or on load. Bumps
    /// `value_revision` but not `write_revision`.
    pub fn set_internal(
        &mut self,
        handle: VariableHandle,
        value: ConfigValue,
    ) -> Result<(), ConfigStoreError> {
        self.set(handle, value, false)
    }

    /// Mutation through the external control surface (e.g. SetVariables /
    /// ChangeConfiguration). Bumps both `write_revision` and
    /// `value_revision` on success.
    pub fn set_external(
        &mut self,
        handle: VariableHandle,
        value: ConfigValue,
    ) -> Result<(), ConfigStoreError> {
        let key = self.key_for(handle.index);
        if self.entries[handle.index].readonly {
            return Err(ConfigStoreError::ReadOnly(key));
        }
        self.set(handle, value, true)
    }

    fn set(
        &mut self,
        handle: VariableHandle,
        value: ConfigValue,
        bump_write_revision: bool,
    ) -> Result<(), ConfigStoreError> {
        let key = self.key_for(handle.index);
        if value.kind() != handle.kind {
            return Err(ConfigStoreError::TypeMismatch(key));
        }
        if let Some(validators) = self.validators.get(&key) {
            if !validators.iter().all(|v| v(&value)) {
                return Err(ConfigStoreError::ValidationFailed(key));
            }
        }

        let entry = &mut self.entries[handle.index];
        entry.value = value;
        entry.value_revision += 1;
        if bump_write_revision {
            entry.write_revision += 1;
        }
        Ok(())
    }

    pub fn reboot_required(&self, handle: VariableHandle) -> bool {
        self.entries[handle.index].reboot_required
    }

    /// Persists every entry declared with `persistent = true` into a single
    /// JSON container, size-capped at [`MO_MAX_JSON_CAPACITY`]. If the full
    /// set would exceed the cap, a first-come-first-served prefix is
    /// persisted instead and the truncation is logged.
    pub fn save(&self, fs: &dyn FilesystemAdapter, container_name: &str) -> Result<(), ConfigStoreError> {
        let mut entries = Vec::new();
        for (key, &index) in &self.keys {
            let e = &self.entries[index];
            if !e.persistent {
                continue;
            }
            entries.push(PersistedEntry {
                key: key.clone(),
                value: e.value.clone(),
                readonly: e.readonly,
                reboot_required: e.reboot_required,
                write_revision: e.write_revision,
                value_revision: e.value_revision,
            });
        }

        let container = PersistedContainer {
            content_type: "ocpp-core-config".to_string(),
            version: 1,
            entries,
        };

        let mut bytes = serde_json::to_vec(&container).unwrap_or_default();
        if bytes.len() > MO_MAX_JSON_CAPACITY {
            tracing::warn!(
                container = container_name,
                capacity = MO_MAX_JSON_CAPACITY,
                size = bytes.len(),
                "configuration container exceeds capacity, persisting a prefix"
            );
            let mut truncated = container;
            while !truncated.entries.is_empty() {
                truncated.entries.pop();
                bytes = serde_json::to_vec(&truncated).unwrap_or_default();
                if bytes.len() <= MO_MAX_JSON_CAPACITY {
                    break;
                }
            }
        }

        fs.write(container_name, &bytes)
            .map_err(ConfigStoreError::Filesystem)
    }

    /// Loads a container previously written by [`Self::save`]. Entries whose
    /// key was never `declare`d, whose type doesn't match what was declared,
    /// or whose value fails a registered validator are skipped with a
    /// warning; the whole file is never invalidated by one bad entry.
    pub fn load(&mut self, fs: &dyn FilesystemAdapter, container_name: &str) -> Result<(), ConfigStoreError> {
        let container: Option<PersistedContainer> =
            load_json(fs, container_name).map_err(ConfigStoreError::Filesystem)?;
        let Some(container) = container else {
            return Ok(());
        };

        for persisted in container.entries {
            let Some(&index) = self.keys.get(&persisted.key) else {
                tracing::warn!(key = ?persisted.key, "skipping unknown persisted configuration variable");
                continue;
            };
            let handle = VariableHandle {
                index,
                kind: self.entries[index].value.kind(),
            };
            if persisted.value.kind() != handle.kind {
                tracing::warn!(key = ?persisted.key, "skipping persisted configuration variable with mismatched type");
                continue;
            }
            if self.set_internal(handle, persisted.value).is_err() {
                tracing::warn!(key = ?persisted.key, "discarding persisted value that fails validation, keeping default");
                continue;
            }
            let entry = &mut self.entries[index];
            entry.write_revision = persisted.write_revision;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::MemoryFilesystemAdapter;

    fn heartbeat_key() -> VariableKey {
        VariableKey::v16("HeartbeatInterval")
    }

    #[test]
    fn declare_is_idempotent_and_aliases_the_same_entry() {
        let mut store = ConfigStore::new();
        let h1 = store
            .declare(heartbeat_key(), ConfigValue::Int(86400), DeclareOptions::default())
            .unwrap();
        let h2 = store
            .declare(heartbeat_key(), ConfigValue::Int(1), DeclareOptions::default())
            .unwrap();

        store.set_internal(h1, ConfigValue::Int(120)).unwrap();
        assert_eq!(store.get_int(h2).unwrap(), 120);
    }

    #[test]
    fn declare_with_conflicting_type_fails() {
        let mut store = ConfigStore::new();
        store
            .declare(heartbeat_key(), ConfigValue::Int(86400), DeclareOptions::default())
            .unwrap();
        let result = store.declare(heartbeat_key(), ConfigValue::Bool(true), DeclareOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn value_revision_is_monotone_and_write_revision_only_bumps_externally() {
        let mut store = ConfigStore::new();
        let h = store
            .declare(heartbeat_key(), ConfigValue::Int(86400), DeclareOptions::default())
            .unwrap();
        assert_eq!(store.value_revision(h), 0);
        assert_eq!(store.write_revision(h), 0);

        store.set_internal(h, ConfigValue::Int(60)).unwrap();
        assert_eq!(store.value_revision(h), 1);
        assert_eq!(store.write_revision(h), 0);

        store.set_external(h, ConfigValue::Int(30)).unwrap();
        assert_eq!(store.value_revision(h), 2);
        assert_eq!(store.write_revision(h), 1);
    }

    #[test]
    fn readonly_rejects_external_writes() {
        let mut store = ConfigStore::new();
        let h = store
            .declare(
                VariableKey::v16("LocalAuthListMaxLength"),
                ConfigValue::Int(100),
                DeclareOptions {
                    readonly: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(store.set_external(h, ConfigValue::Int(5)).is_err());
        assert!(store.set_internal(h, ConfigValue::Int(5)).is_ok());
    }

    #[test]
    fn failed_validation_does_not_bump_revisions() {
        let mut store = ConfigStore::new();
        let key = VariableKey::v16("EVConnectionTimeOut");
        let h = store
            .declare(key.clone(), ConfigValue::Int(30), DeclareOptions::default())
            .unwrap();
        store.register_validator(key, |v| matches!(v, ConfigValue::Int(i) if *i >= 0));

        assert!(store.set_external(h, ConfigValue::Int(-1)).is_err());
        assert_eq!(store.value_revision(h), 0);
        assert_eq!(store.get_int(h).unwrap(), 30);
    }

    #[test]
    fn save_then_load_round_trips_persistent_entries() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ConfigStore::new();
        let h = store
            .declare(
                heartbeat_key(),
                ConfigValue::Int(86400),
                DeclareOptions {
                    persistent: true,
                    ..Default::default()
                },
            )
            .unwrap();
        store.set_external(h, ConfigValue::Int(120)).unwrap();
        store.save(&fs, "cfg-main.jsn").unwrap();

        let mut reloaded = ConfigStore::new();
        let h2 = reloaded
            .declare(
                heartbeat_key(),
                ConfigValue::Int(86400),
                DeclareOptions {
                    persistent: true,
                    ..Default::default()
                },
            )
            .unwrap();
        reloaded.load(&fs, "cfg-main.jsn").unwrap();
        assert_eq!(reloaded.get_int(h2).unwrap(), 120);
    }

    #[test]
    fn loading_a_conflicting_validator_value_discards_and_keeps_default() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ConfigStore::new();
        let key = VariableKey::v16("EVConnectionTimeOut");
        let h = store
            .declare(
                key.clone(),
                ConfigValue::Int(30),
                DeclareOptions {
                    persistent: true,
                    ..Default::default()
                },
            )
            .unwrap();
        // Persist a negative value directly, bypassing the validator, to
        // simulate a stale file written by an older, laxer version.
        store.entries[h.index].value = ConfigValue::Int(-5);
        store.save(&fs, "cfg-main.jsn").unwrap();

        let mut reloaded = ConfigStore::new();
        let h2 = reloaded
            .declare(
                key.clone(),
                ConfigValue::Int(30),
                DeclareOptions {
                    persistent: true,
                    ..Default::default()
                },
            )
            .unwrap();
        reloaded.register_validator(key, |v| matches!(v, ConfigValue::Int(i) if *i >= 0));
        reloaded.load(&fs, "cfg-main.jsn").unwrap();
        assert_eq!(reloaded.get_int(h2).unwrap(), 30);
    }
}
