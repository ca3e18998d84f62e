use tracing::info;

use crate::store::WhiskyStore;

/// Whiskies every fresh store starts with, as `(name, origin)` in the order
/// they receive ids.
static WHISKIES: &[(&str, &str)] = &[
    ("Bowmore 15 Years Laimrig", "Scotland, Islay"),
    ("Talisker 57° North", "Scotland, Island"),
];

/// Insert the startup whiskies with sequentially allocated ids.
pub fn seed_whiskies(store: &mut WhiskyStore) {
    for (name, origin) in WHISKIES {
        let whisky = store.insert_new(name, origin);
        info!(id = whisky.id, name = %name, "Seeded whisky");
    }
}
