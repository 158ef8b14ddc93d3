use serde::{Deserialize, Deserializer};

/// Deserializes an optional string query parameter, treating an empty string
/// as absent so `?state=` behaves like no filter at all.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}
