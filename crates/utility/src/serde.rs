use serde::{Deserialize, Deserializer};

/// Maps an explicit `null` (or a missing field, together with
/// `#[serde(default)]`) to `T::default()`.
pub fn default_if_empty<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(|x| x.unwrap_or_default())
}

/// Maps `""` to `None`. Used for CSV columns where an empty cell means absent.
pub fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|value| !value.is_empty()))
}

/// Parses a number from a string cell. Empty or malformed cells become `None`
/// instead of failing the whole row.
pub fn lenient_number<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.and_then(|value| value.trim().parse().ok()))
}
