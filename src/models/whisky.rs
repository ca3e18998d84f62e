use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};

/// Core whisky entity. Hash/Eq are by id so the store key and the entity agree
/// on identity; `name` and `origin` are independently settable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Whisky {
    #[serde(deserialize_with = "coerce_id")]
    pub id: i32,
    /// Null after an update whose body omitted it.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl Whisky {
    pub fn new(id: i32, name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            origin: Some(origin.into()),
        }
    }
}

impl Hash for Whisky {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for Whisky {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Whisky {}

/// Accepts `2` as well as `"2"` for the id. A string must parse as an integer
/// exactly as written, the same rule the `:id` path segment follows, so
/// surrounding whitespace is rejected. Fractional numbers, `2.0` included,
/// are rejected.
fn coerce_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    let value = match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n,
        RawId::Text(s) => s.parse::<i64>().map_err(|_| {
            <D::Error as de::Error>::custom(format!("id {:?} is not an integer", s))
        })?,
    };
    i32::try_from(value)
        .map_err(|_| <D::Error as de::Error>::custom(format!("id {} out of range", value)))
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `PUT /api/whiskies/:id`. Both fields are written to the stored
/// entity as given, absent ones included. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateWhisky {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}
