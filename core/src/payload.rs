//! JSON payloads carried by `datasets-get-entry` and `datasets-set-entry`
//! and their translation into guestinfo commands.

use crate::error::DecodeError;
use crate::keymap::guestinfo_key;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use std::collections::HashMap;

// Field names also accept the capitalised spelling older clients send.

/// Payload of `datasets-get-entry`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetGetRequest {
    #[serde(alias = "Dataset")]
    pub dataset: Option<String>,
    #[serde(alias = "Keys")]
    pub keys: Option<Vec<String>>,
}

/// Payload of `datasets-set-entry`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSetRequest {
    #[serde(alias = "Dataset")]
    pub dataset: Option<String>,
    #[serde(alias = "Entries")]
    pub entries: Option<Vec<DatasetEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetEntry {
    #[serde(alias = "Key")]
    pub key: String,
    /// Raw JSON text of the value. An explicit `null` is kept as `null`.
    #[serde(default, alias = "Value", deserialize_with = "raw_json")]
    pub value: Option<Box<RawValue>>,
}

fn raw_json<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

impl DatasetGetRequest {
    pub fn guestinfo_commands(&self) -> Vec<String> {
        let dataset = self.dataset.as_deref().unwrap_or_default();
        self.keys
            .iter()
            .flatten()
            .map(|key| format!("info-get {}", guestinfo_key(dataset, key)))
            .collect()
    }
}

impl DatasetSetRequest {
    /// Build one `info-set` per mapped key.
    ///
    /// Entries that map to the same guestinfo key collapse into a single
    /// command carrying the last value. The command keeps the position of
    /// the first entry with that key.
    pub fn guestinfo_commands(&self) -> Vec<String> {
        let dataset = self.dataset.as_deref().unwrap_or_default();
        let entries = self.entries.as_deref().unwrap_or_default();

        let mut pairs: Vec<(String, &str)> = Vec::with_capacity(entries.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for entry in entries {
            let key = guestinfo_key(dataset, &entry.key);
            let value = entry.value.as_deref().map(RawValue::get).unwrap_or("");
            match index.get(&key) {
                Some(&slot) => pairs[slot].1 = value,
                None => {
                    index.insert(key.clone(), pairs.len());
                    pairs.push((key, value));
                }
            }
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("info-set {} {}", key, value))
            .collect()
    }
}

/// Decode a `datasets-get-entry` payload into `info-get` commands.
/// A top-level `null` is an empty request.
pub fn decode_get(json: &str) -> Result<Vec<String>, DecodeError> {
    let request: Option<DatasetGetRequest> =
        serde_json::from_str(json).map_err(DecodeError::Get)?;
    Ok(request.unwrap_or_default().guestinfo_commands())
}

/// Decode a `datasets-set-entry` payload into `info-set` commands.
/// A top-level `null` is an empty request.
pub fn decode_set(json: &str) -> Result<Vec<String>, DecodeError> {
    let request: Option<DatasetSetRequest> =
        serde_json::from_str(json).map_err(DecodeError::Set)?;
    Ok(request.unwrap_or_default().guestinfo_commands())
}
