// Per-user session: navigation, filters and the cached page data
use crate::application::page_data::PageData;
use crate::domain::filters::FilterSelection;
use crate::domain::navigation::NavigationState;
use crate::domain::page::Page;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const MAX_ID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!("{:016x}", rand::random::<u64>()))
    }

    /// Accept a client-supplied id only if it looks like one we issued.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw.chars().all(|c| c.is_ascii_hexdigit());
        valid.then(|| Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub navigation: NavigationState,
    pub filters: FilterSelection,
    /// Bumped by "Refresh Data"; part of the data seed.
    pub generation: u64,
    cache: HashMap<Page, Arc<PageData>>,
}

impl Session {
    pub fn new(id: SessionId, filters: FilterSelection) -> Self {
        Self {
            id,
            navigation: NavigationState::default(),
            filters,
            generation: 0,
            cache: HashMap::new(),
        }
    }

    pub fn cached(&self, page: Page) -> Option<Arc<PageData>> {
        self.cache.get(&page).cloned()
    }

    pub fn cache(&mut self, page: Page, data: Arc<PageData>) {
        self.cache.insert(page, data);
    }

    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }

    /// Drop cached data and move to the next generation.
    pub fn refresh(&mut self) {
        self.generation += 1;
        self.cache.clear();
    }

    /// Seed for this session's current generation. Stable for equal
    /// (base, id, generation).
    pub fn data_seed(&self, base: u64) -> u64 {
        // FNV-1a over the id, then mixed with base and generation
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in self.id.as_str().bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        base ^ hash ^ self.generation.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}
