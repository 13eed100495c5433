//! Film — the single persisted record, and the seed collection used when
//! storage has nothing readable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A film record as stored in the JSON array.
///
/// `duration` and `budget` keep the exact JSON number they were given, so an
/// integer written as `120` is written back as `120`, not `120.0`.
/// Fields the record does not know about are carried in `extra` and written
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: u64,
    pub title: String,
    pub duration: Number,
    pub budget: Number,
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Film {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        duration: impl Into<Number>,
        budget: Number,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration: duration.into(),
            budget,
            link: link.into(),
            extra: Map::new(),
        }
    }

    /// Duration in minutes as a float, for comparisons.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_f64().unwrap_or(0.0)
    }

    /// Shallow-merge a JSON object over this record.
    ///
    /// Every key of `patch` replaces the key of the same name, including `id`.
    /// Returns `None` when the merged object no longer fits a `Film`
    /// (e.g. `budget` set to a string).
    pub fn merged_with(&self, patch: &Map<String, Value>) -> Option<Film> {
        let mut merged = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => return None,
        };
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(merged)).ok()
    }
}

fn float(value: f64) -> Number {
    Number::from_f64(value).unwrap_or_else(|| Number::from(0))
}

/// The three films served when the backing file is absent or unreadable.
pub fn default_films() -> Vec<Film> {
    vec![
        Film::new(
            1,
            "Parasite",
            120,
            float(50.5),
            "https://www.imdb.com/title/tt6751668/?ref_=ext_shr_lnk",
        ),
        Film::new(
            2,
            "Moonlight",
            151,
            float(15.5),
            "https://www.imdb.com/title/tt4975722/?ref_=ext_shr_lnk",
        ),
        Film::new(
            3,
            "Waves",
            215,
            float(10.2),
            "https://www.imdb.com/title/tt8652728/?ref_=ext_shr_lnk",
        ),
    ]
}
