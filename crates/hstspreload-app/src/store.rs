//! Persistence of per-domain scan state.
//!
//! The engine never touches the store; callers record a finished scan here.

use hstspreload_types::{Issues, PolicyType, ScanReport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no state recorded for domain: {0}")]
    UnknownDomain(String),

    #[error("store lock poisoned")]
    Poisoned,

    #[error("failed to access state file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file {} is not valid JSON", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One completed scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub scanned_at: OffsetDateTime,
    pub issues: Issues,
}

impl From<&ScanReport> for ScanRecord {
    fn from(report: &ScanReport) -> Self {
        Self {
            scanned_at: report.finished_at,
            issues: report.issues.clone(),
        }
    }
}

/// Stored state for a domain, keyed by `name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainState {
    pub name: String,
    /// Policy under which the domain is on the preload list.
    pub policy: PolicyType,
    #[serde(default)]
    pub scans: Vec<ScanRecord>,
}

impl DomainState {
    pub fn new(name: impl Into<String>, policy: PolicyType) -> Self {
        Self {
            name: name.into(),
            policy,
            scans: Vec::new(),
        }
    }

    pub fn last_scan(&self) -> Option<&ScanRecord> {
        self.scans.last()
    }
}

pub trait Datastore {
    fn get_domain_state(&self, name: &str) -> StoreResult<Option<DomainState>>;

    /// Insert or replace the state for `name`.
    fn set_domain_state(&self, name: &str, state: DomainState) -> StoreResult<()>;

    /// Append a scan to an existing domain.
    fn update_scan(&self, name: &str, scan: ScanRecord) -> StoreResult<()>;

    /// Create `name` under `policy` unless it already exists. Existing state is untouched.
    fn ensure_domain_state(&self, name: &str, policy: PolicyType) -> StoreResult<()>;
}

/// Record `report` for `name`, creating the domain under `policy` if it is new.
pub fn record_scan(
    store: &impl Datastore,
    name: &str,
    policy: PolicyType,
    report: &ScanReport,
) -> StoreResult<()> {
    store.ensure_domain_state(name, policy)?;
    store.update_scan(name, ScanRecord::from(report))
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStore {
    domains: Mutex<BTreeMap<String, DomainState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Datastore for MemoryStore {
    fn get_domain_state(&self, name: &str) -> StoreResult<Option<DomainState>> {
        let domains = self.domains.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(domains.get(name).cloned())
    }

    fn set_domain_state(&self, name: &str, mut state: DomainState) -> StoreResult<()> {
        let mut domains = self.domains.lock().map_err(|_| StoreError::Poisoned)?;
        state.name = name.to_string();
        domains.insert(name.to_string(), state);
        Ok(())
    }

    fn update_scan(&self, name: &str, scan: ScanRecord) -> StoreResult<()> {
        let mut domains = self.domains.lock().map_err(|_| StoreError::Poisoned)?;
        let state = domains
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownDomain(name.to_string()))?;
        state.scans.push(scan);
        Ok(())
    }

    fn ensure_domain_state(&self, name: &str, policy: PolicyType) -> StoreResult<()> {
        let mut domains = self.domains.lock().map_err(|_| StoreError::Poisoned)?;
        domains
            .entry(name.to_string())
            .or_insert_with(|| DomainState::new(name, policy));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// All domains in one JSON document, rewritten on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, DomainState>> {
        let Some(text) = read_optional(&self.path).map_err(|source| self.io_error(source))?
        else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Serialization {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, domains: &BTreeMap<String, DomainState>) -> StoreResult<()> {
        let data =
            serde_json::to_string_pretty(domains).map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        std::fs::write(&self.path, data).map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), domains = domains.len(), "state written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Datastore for JsonFileStore {
    fn get_domain_state(&self, name: &str) -> StoreResult<Option<DomainState>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.load()?.remove(name))
    }

    fn set_domain_state(&self, name: &str, mut state: DomainState) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut domains = self.load()?;
        state.name = name.to_string();
        domains.insert(name.to_string(), state);
        self.save(&domains)
    }

    fn update_scan(&self, name: &str, scan: ScanRecord) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut domains = self.load()?;
        let state = domains
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownDomain(name.to_string()))?;
        state.scans.push(scan);
        self.save(&domains)
    }

    fn ensure_domain_state(&self, name: &str, policy: PolicyType) -> StoreResult<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut domains = self.load()?;
        if domains.contains_key(name) {
            return Ok(());
        }
        domains.insert(name.to_string(), DomainState::new(name, policy));
        self.save(&domains)
    }
}

/// Read a file, treating "not found" as `None`.
fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hstspreload_types::ids;

    fn scan(code: Option<&str>) -> ScanRecord {
        let mut issues = Issues::new();
        if let Some(code) = code {
            issues.add_error(code, "", "");
        }
        ScanRecord {
            scanned_at: OffsetDateTime::UNIX_EPOCH,
            issues,
        }
    }

    fn exercise(store: &impl Datastore) {
        assert_eq!(store.get_domain_state("example.com").expect("get"), None);

        let err = store.update_scan("example.com", scan(None)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownDomain(_)));

        store
            .set_domain_state("example.com", DomainState::new("ignored", PolicyType::Bulk18Weeks))
            .expect("set");
        store.update_scan("example.com", scan(None)).expect("update");
        store
            .update_scan("example.com", scan(Some(ids::CODE_RESPONSE_NO_HEADER)))
            .expect("update");

        let state = store
            .get_domain_state("example.com")
            .expect("get")
            .expect("state present");
        assert_eq!(state.name, "example.com");
        assert_eq!(state.policy, PolicyType::Bulk18Weeks);
        assert_eq!(state.scans.len(), 2);
        assert_eq!(
            state.last_scan().expect("last").issues.error_codes(),
            vec![ids::CODE_RESPONSE_NO_HEADER]
        );
    }

    #[test]
    fn memory_store_contract() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn json_file_store_contract() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let store = JsonFileStore::new(tmp.path().join("nested").join("state.json"));
        exercise(&store);

        let reopened = JsonFileStore::new(store.path());
        let state = reopened
            .get_domain_state("example.com")
            .expect("get")
            .expect("persisted");
        assert_eq!(state.scans.len(), 2);
    }

    #[test]
    fn json_file_store_rejects_corrupt_file() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = tmp.path().join("state.json");
        std::fs::write(&path, "not json").expect("write");
        let err = JsonFileStore::new(&path).get_domain_state("x").unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }

    #[test]
    fn record_scan_creates_domain_once() {
        let store = MemoryStore::new();
        let report = crate::check_header(
            "max-age=31536000; includeSubDomains; preload",
            hstspreload_domain::RuleSet::Preloadable,
        );
        record_scan(&store, "example.com", PolicyType::Bulk1Year, &report).expect("record");
        record_scan(&store, "example.com", PolicyType::Bulk18Weeks, &report).expect("record");

        let state = store.get_domain_state("example.com").expect("get").expect("state");
        assert_eq!(state.policy, PolicyType::Bulk1Year);
        assert_eq!(state.scans.len(), 2);
        assert!(state.scans[0].issues.is_empty());
    }

    fn record_concurrently(store: &(impl Datastore + Sync)) {
        let report = crate::check_header("max-age=0", hstspreload_domain::RuleSet::Removable);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    record_scan(store, "example.com", PolicyType::Bulk18Weeks, &report)
                        .expect("record");
                });
            }
        });

        let state = store.get_domain_state("example.com").expect("get").expect("state");
        assert_eq!(state.scans.len(), 8);
    }

    #[test]
    fn concurrent_first_recordings_keep_every_scan() {
        record_concurrently(&MemoryStore::new());

        let tmp = tempfile::tempdir().expect("create temp dir");
        record_concurrently(&JsonFileStore::new(tmp.path().join("state.json")));
    }

    #[test]
    fn ensure_does_not_replace_existing_state() {
        let store = MemoryStore::new();
        store
            .set_domain_state("example.com", DomainState::new("example.com", PolicyType::Bulk1Year))
            .expect("set");
        store.update_scan("example.com", scan(None)).expect("update");

        store
            .ensure_domain_state("example.com", PolicyType::Bulk18Weeks)
            .expect("ensure");

        let state = store.get_domain_state("example.com").expect("get").expect("state");
        assert_eq!(state.policy, PolicyType::Bulk1Year);
        assert_eq!(state.scans.len(), 1);
    }
}
