use crate::core::filesystem::{prefix_scan_delete, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use crate::enums::authorization_status_enum_type::AuthorizationStatusEnumType;
use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOCAL_AUTH_LIST_FILE: &str = "localauth.jsn";
pub const AUTH_CACHE_FILE: &str = "authcache.jsn";
pub const DEFAULT_LOCAL_AUTH_CACHE_MAX_LENGTH: usize = 8;

#[derive(Error, Diagnostic, Debug)]
pub enum AuthStoreError {
    #[error("failed to persist authorization store: {0}")]
    #[diagnostic()]
    Persist(#[source] FilesystemError),
}

impl CoreError for AuthStoreError {
    fn to_call_error(&self) -> (&'static str, String) {
        ("InternalError", self.to_string())
    }
}

/// One entry in the Local Authorization List or the Authorization Cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationEntry {
    pub id_tag: String,
    pub parent_id_tag: Option<String>,
    pub status: AuthorizationStatusEnumType,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl AuthorizationEntry {
    /// Entries with an empty idTag carry no useful identity and are eligible
    /// for pruning during compaction.
    pub fn is_prunable(&self) -> bool {
        self.id_tag.is_empty()
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry <= now)
    }
}

fn id_tag_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// One incoming update row for a differential Local List update: `None`
/// means "remove this idTag", matching the wire semantics where an absent
/// idTagInfo in SendLocalList means deletion.
pub struct LocalListUpdate {
    pub id_tag: String,
    pub entry: Option<AuthorizationEntry>,
}

#[derive(Serialize, Deserialize, Default)]
struct PersistedLocalList {
    list_version: i64,
    entries: Vec<AuthorizationEntry>,
}

/// Server-owned, versioned local authorization list (C4, first half).
#[derive(Default)]
pub struct LocalAuthorizationList {
    list_version: i64,
    entries: Vec<AuthorizationEntry>,
}

impl LocalAuthorizationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_version(&self) -> i64 {
        self.list_version
    }

    pub fn get(&self, id_tag: &str) -> Option<&AuthorizationEntry> {
        self.entries.iter().find(|e| id_tag_eq(&e.id_tag, id_tag))
    }

    /// Applies an update under the given `list_version`. A full update
    /// (`differential = false`) atomically replaces the existing list with
    /// `updates` (entries whose `entry` is `None` are simply omitted). A
    /// differential update upserts or removes individual rows in place.
    /// When `filter_empty` is set, prunable entries are dropped from the
    /// result. Persists on success; on persist failure the previous on-disk
    /// state is reloaded so memory and disk never diverge.
    pub fn update(
        &mut self,
        fs: &dyn FilesystemAdapter,
        list_version: i64,
        updates: Vec<LocalListUpdate>,
        differential: bool,
        filter_empty: bool,
    ) -> Result<(), AuthStoreError> {
        let previous_version = self.list_version;
        let previous_entries = self.entries.clone();

        if differential {
            for update in updates {
                self.entries.retain(|e| !id_tag_eq(&e.id_tag, &update.id_tag));
                if let Some(entry) = update.entry {
                    self.entries.push(entry);
                }
            }
        } else {
            self.entries = updates.into_iter().filter_map(|u| u.entry).collect();
        }

        if filter_empty {
            self.entries.retain(|e| !e.is_prunable());
        }

        self.list_version = list_version;

        if let Err(e) = self.write_json(fs) {
            tracing::warn!(error = %e, "failed to persist local authorization list, reloading previous state");
            self.list_version = previous_version;
            self.entries = previous_entries;
            return Err(AuthStoreError::Persist(e));
        }

        Ok(())
    }

    fn write_json(&self, fs: &dyn FilesystemAdapter) -> Result<(), FilesystemError> {
        let persisted = PersistedLocalList {
            list_version: self.list_version,
            entries: self.entries.clone(),
        };
        crate::core::filesystem::store_json(fs, LOCAL_AUTH_LIST_FILE, &persisted)
    }

    pub fn load(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), FilesystemError> {
        let persisted: Option<PersistedLocalList> =
            crate::core::filesystem::load_json(fs, LOCAL_AUTH_LIST_FILE)?;
        if let Some(persisted) = persisted {
            self.list_version = persisted.list_version;
            self.entries = persisted.entries;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Default)]
struct PersistedCache {
    entries: Vec<AuthorizationEntry>,
}

/// FIFO/LRU capacity-bounded authorization cache (C4, second half).
pub struct AuthorizationCache {
    entries: Vec<AuthorizationEntry>,
    max_length: usize,
}

impl AuthorizationCache {
    pub fn new(max_length: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_length,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or refreshes `entry`. On a cache hit the entry moves to the
    /// most-recently-used end; on overflow the least-recently-used entry is
    /// evicted.
    pub fn add(&mut self, entry: AuthorizationEntry) {
        self.entries.retain(|e| !id_tag_eq(&e.id_tag, &entry.id_tag));
        self.entries.push(entry);
        while self.entries.len() > self.max_length {
            self.entries.remove(0);
        }
    }

    pub fn get(&self, id_tag: &str) -> Option<&AuthorizationEntry> {
        self.entries.iter().find(|e| id_tag_eq(&e.id_tag, id_tag))
    }

    /// Empties the in-memory cache and removes the persisted cache file plus
    /// any related transient files sharing its prefix.
    pub fn clear(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), FilesystemError> {
        self.entries.clear();
        prefix_scan_delete(fs, AUTH_CACHE_FILE)?;
        Ok(())
    }

    pub fn save(&self, fs: &dyn FilesystemAdapter) -> Result<(), FilesystemError> {
        let persisted = PersistedCache {
            entries: self.entries.clone(),
        };
        crate::core::filesystem::store_json(fs, AUTH_CACHE_FILE, &persisted)
    }

    pub fn load(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), FilesystemError> {
        let persisted: Option<PersistedCache> = crate::core::filesystem::load_json(fs, AUTH_CACHE_FILE)?;
        if let Some(persisted) = persisted {
            self.entries = persisted.entries;
        }
        Ok(())
    }
}

/// The outcome of comparing a server's Authorize response against the local
/// list, per C4's conflict-detection contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationConflict {
    None,
    /// Status or parentIdTag disagree; the caller should emit a
    /// StatusNotification with errorCode "LocalListConflict".
    LocalListConflict,
}

fn normalize_status(status: AuthorizationStatusEnumType) -> AuthorizationStatusEnumType {
    match status {
        AuthorizationStatusEnumType::ConcurrentTx => AuthorizationStatusEnumType::Accepted,
        other => other,
    }
}

/// Compares the local list's record for `id_tag` against the server's
/// authorization result, applying local expiry and normalizing
/// `ConcurrentTx` to `Accepted` before comparing.
pub fn notify_authorization(
    local_list: &LocalAuthorizationList,
    now: DateTime<Utc>,
    id_tag: &str,
    server_status: AuthorizationStatusEnumType,
    server_parent_id_tag: Option<&str>,
) -> AuthorizationConflict {
    let Some(local) = local_list.get(id_tag) else {
        return AuthorizationConflict::None;
    };

    let local_status = if local.is_expired(now) {
        AuthorizationStatusEnumType::Expired
    } else {
        normalize_status(local.status.clone())
    };
    let server_status = normalize_status(server_status);

    let status_conflict = local_status != server_status;
    let parent_conflict = local.parent_id_tag.as_deref() != server_parent_id_tag;

    if status_conflict || parent_conflict {
        AuthorizationConflict::LocalListConflict
    } else {
        AuthorizationConflict::None
    }
}
