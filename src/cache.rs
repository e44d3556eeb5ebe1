//! Query cache
//!
//! Keyed store for server data shared between the customer table and the
//! modals. Writers never touch the cached value directly: they invalidate the
//! key and the owner of the query refetches it.

use std::collections::HashMap;

use tracing::debug;

/// Query key for the customer collection
pub const CUSTOMERS_KEY: &str = "customers";

/// The narrow interface the form and delete controllers depend on
pub trait QueryStore<V> {
    /// Current data for `key`, fresh or stale
    fn get(&self, key: &str) -> Option<&V>;

    /// Mark `key` stale. Returns true if the key is known and must be refetched.
    fn invalidate(&mut self, key: &str) -> bool;
}

/// Identifies one fetch; only the latest ticket for a key may resolve it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: String,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug)]
struct Entry<V> {
    data: Option<V>,
    stale: bool,
    fetching: bool,
    generation: u64,
    error: Option<String>,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            stale: true,
            fetching: false,
            generation: 0,
            error: None,
        }
    }
}

#[derive(Debug)]
pub struct QueryCache<V> {
    entries: HashMap<String, Entry<V>>,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register interest in a key without fetching it
    pub fn observe(&mut self, key: &str) {
        self.entries.entry(key.to_string()).or_default();
    }

    pub fn is_stale(&self, key: &str) -> bool {
        self.entries.get(key).map(|e| e.stale).unwrap_or(true)
    }

    pub fn is_fetching(&self, key: &str) -> bool {
        self.entries.get(key).map(|e| e.fetching).unwrap_or(false)
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.error.as_deref())
    }

    /// Start a fetch for `key`; any ticket handed out earlier becomes outdated
    pub fn begin_fetch(&mut self, key: &str) -> FetchTicket {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.generation += 1;
        entry.fetching = true;
        FetchTicket {
            key: key.to_string(),
            generation: entry.generation,
        }
    }

    /// Store a fetch result. Returns false if the ticket was outdated and the result dropped.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<V, String>) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.generation != ticket.generation {
            debug!(
                "Dropping outdated fetch for {} (generation {} < {})",
                ticket.key, ticket.generation, entry.generation
            );
            return false;
        }

        entry.fetching = false;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.stale = false;
                entry.error = None;
            }
            Err(e) => {
                // Keep the last good data around; the key stays stale
                entry.error = Some(e);
            }
        }
        true
    }
}

impl<V> QueryStore<V> for QueryCache<V> {
    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    fn invalidate(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                debug!("Invalidating query {}", key);
                entry.stale = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_stores_data_and_clears_stale() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(cache.is_stale(CUSTOMERS_KEY));

        let ticket = cache.begin_fetch(CUSTOMERS_KEY);
        assert!(cache.is_fetching(CUSTOMERS_KEY));
        assert!(cache.resolve(&ticket, Ok(vec![1, 2])));

        assert!(!cache.is_stale(CUSTOMERS_KEY));
        assert!(!cache.is_fetching(CUSTOMERS_KEY));
        assert_eq!(cache.get(CUSTOMERS_KEY), Some(&vec![1, 2]));
    }

    #[test]
    fn invalidate_keeps_data_but_marks_stale() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let ticket = cache.begin_fetch(CUSTOMERS_KEY);
        cache.resolve(&ticket, Ok(vec![1]));

        assert!(cache.invalidate(CUSTOMERS_KEY));
        assert!(cache.is_stale(CUSTOMERS_KEY));
        assert_eq!(cache.get(CUSTOMERS_KEY), Some(&vec![1]));
    }

    #[test]
    fn invalidate_unknown_key_reports_nothing_to_refetch() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(!cache.invalidate("titles"));
        cache.observe("titles");
        assert!(cache.invalidate("titles"));
    }

    #[test]
    fn outdated_ticket_is_dropped() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let first = cache.begin_fetch(CUSTOMERS_KEY);
        let second = cache.begin_fetch(CUSTOMERS_KEY);

        assert!(cache.resolve(&second, Ok(vec![2])));
        assert!(!cache.resolve(&first, Ok(vec![1])));
        assert_eq!(cache.get(CUSTOMERS_KEY), Some(&vec![2]));
    }

    #[test]
    fn failed_fetch_keeps_last_good_data() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let ok = cache.begin_fetch(CUSTOMERS_KEY);
        cache.resolve(&ok, Ok(vec![3]));
        cache.invalidate(CUSTOMERS_KEY);

        let failed = cache.begin_fetch(CUSTOMERS_KEY);
        cache.resolve(&failed, Err("connection refused".into()));

        assert_eq!(cache.get(CUSTOMERS_KEY), Some(&vec![3]));
        assert_eq!(cache.error(CUSTOMERS_KEY), Some("connection refused"));
        assert!(cache.is_stale(CUSTOMERS_KEY));
    }
}
