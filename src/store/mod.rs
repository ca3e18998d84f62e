pub mod id;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{UpdateWhisky, Whisky};

use id::IdAllocator;

/// Parse an `:id` path segment. Anything `i32::from_str` rejects, including
/// an empty string, is an [`AppError::InvalidIdentifier`].
pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}

// ── WhiskyStore ──────────────────────────────────────────────────────────────

/// In-memory whisky collection keyed by id.
///
/// Backed by `indexmap::IndexMap`, so listing follows insertion order.
/// Replacing an existing key keeps its original slot, and removal uses
/// `shift_remove` so the remaining entries keep their relative order.
///
/// Every method runs to completion without awaiting; the process-wide
/// instance sits behind one `RwLock` in `AppState`, which gives each
/// operation exclusive (or shared, for reads) access to the whole map.
#[derive(Debug, Default)]
pub struct WhiskyStore {
    entries: IndexMap<i32, Whisky>,
    ids: IdAllocator,
}

impl WhiskyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two startup whiskies.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        crate::seed::seed_whiskies(&mut store);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a whisky under a freshly allocated id.
    pub fn insert_new(&mut self, name: &str, origin: &str) -> Whisky {
        let whisky = Whisky::new(self.ids.next(), name, origin);
        self.entries.insert(whisky.id, whisky.clone());
        whisky
    }

    /// All whiskies, in insertion order.
    pub fn list(&self) -> Vec<Whisky> {
        self.entries.values().cloned().collect()
    }

    /// Store `whisky` under its own id. An existing entry with that id is
    /// replaced wholesale.
    pub fn create(&mut self, whisky: Whisky) -> Whisky {
        if let Some(previous) = self.entries.insert(whisky.id, whisky.clone()) {
            debug!(id = previous.id, "Create replaced an existing whisky");
        }
        whisky
    }

    pub fn read(&self, id: i32) -> AppResult<Whisky> {
        self.entries.get(&id).cloned().ok_or(AppError::NotFound(id))
    }

    /// Overwrite `name` and `origin` of an existing whisky with the payload's
    /// values. Fields missing from the payload are written as null.
    pub fn update(&mut self, id: i32, payload: UpdateWhisky) -> AppResult<Whisky> {
        let whisky = self.entries.get_mut(&id).ok_or(AppError::NotFound(id))?;
        whisky.name = payload.name;
        whisky.origin = payload.origin;
        Ok(whisky.clone())
    }

    /// Remove a whisky if present. Deleting an unknown id is not an error.
    pub fn delete(&mut self, id: i32) -> Option<Whisky> {
        self.entries.shift_remove(&id)
    }
}
