use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::defaults::{default_categories, default_specializations};

/// A configuration read that always yields a value.
///
/// `Stored` carries what came out of the data store (after validation);
/// `Default` means every failure mode (transport, missing row, bad shape)
/// collapsed into the hardcoded fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    Stored(T),
    Default(T),
}

impl<T> Fallback<T> {
    pub fn is_default(&self) -> bool {
        matches!(self, Fallback::Default(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Fallback::Stored(value) | Fallback::Default(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorTaxonomies {
    pub specializations: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for DoctorTaxonomies {
    fn default() -> Self {
        Self {
            specializations: default_specializations(),
            categories: default_categories(),
        }
    }
}

impl DoctorTaxonomies {
    /// Validates a stored setting value, filling any unusable list from the defaults.
    pub fn from_setting(value: Value) -> Fallback<Self> {
        let Value::Object(map) = value else {
            warn!("Doctor taxonomies setting is not an object, using defaults");
            return Fallback::Default(Self::default());
        };

        let stored_specializations = string_list(&map, "specializations");
        let stored_categories = string_list(&map, "categories");

        if stored_specializations.is_none() && stored_categories.is_none() {
            warn!("Doctor taxonomies setting has no usable lists, using defaults");
            return Fallback::Default(Self::default());
        }

        let specializations = stored_specializations.unwrap_or_else(|| {
            warn!("Doctor taxonomies missing specializations, using defaults");
            default_specializations()
        });
        let categories = stored_categories.unwrap_or_else(|| {
            warn!("Doctor taxonomies missing categories, using defaults");
            default_categories()
        });

        Fallback::Stored(Self { specializations, categories })
    }
}

/// Trimmed, de-duplicated non-empty strings, or `None` if nothing usable remains.
fn string_list(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;

    let mut list: Vec<String> = Vec::with_capacity(items.len());
    for item in items.iter().filter_map(Value::as_str).map(str::trim) {
        if !item.is_empty() && !list.iter().any(|existing| existing == item) {
            list.push(item.to_string());
        }
    }

    (!list.is_empty()).then_some(list)
}

/// Homepage CMS blob; only JSON objects are accepted.
pub fn homepage_from_setting(value: Value) -> Fallback<Option<Map<String, Value>>> {
    match value {
        Value::Object(map) => Fallback::Stored(Some(map)),
        _ => {
            warn!("Homepage content setting is not an object");
            Fallback::Default(None)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingRow {
    pub value: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomiesResponse {
    pub config: DoctorTaxonomies,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomepageContentResponse {
    pub config: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_taxonomies_are_kept() {
        let stored = DoctorTaxonomies::from_setting(json!({
            "specializations": ["Cardiology", " Dermatology "],
            "categories": ["Mental Health"]
        }));

        assert!(!stored.is_default());
        let taxonomies = stored.into_inner();
        assert_eq!(taxonomies.specializations, vec!["Cardiology", "Dermatology"]);
        assert_eq!(taxonomies.categories, vec!["Mental Health"]);
    }

    #[test]
    fn test_empty_or_malformed_lists_fall_back_per_field() {
        let result = DoctorTaxonomies::from_setting(json!({
            "specializations": ["", "  ", 42],
            "categories": "Mental Health"
        }));

        assert!(result.is_default());
        assert_eq!(result.into_inner(), DoctorTaxonomies::default());

        let mixed = DoctorTaxonomies::from_setting(json!({
            "specializations": [],
            "categories": ["Follow-up"]
        }));

        assert!(!mixed.is_default());
        let taxonomies = mixed.into_inner();
        assert_eq!(taxonomies.specializations, default_specializations());
        assert_eq!(taxonomies.categories, vec!["Follow-up"]);
    }

    #[test]
    fn test_empty_object_is_default() {
        let result = DoctorTaxonomies::from_setting(json!({}));
        assert!(result.is_default());
        assert_eq!(result.into_inner(), DoctorTaxonomies::default());
    }

    #[test]
    fn test_duplicates_are_removed() {
        let taxonomies = DoctorTaxonomies::from_setting(json!({
            "specializations": ["Cardiology", "Cardiology"],
            "categories": ["Follow-up"]
        }))
        .into_inner();

        assert_eq!(taxonomies.specializations, vec!["Cardiology"]);
    }

    #[test]
    fn test_non_object_setting_is_default() {
        let result = DoctorTaxonomies::from_setting(json!(["Cardiology"]));
        assert!(result.is_default());
        assert_eq!(result.into_inner(), DoctorTaxonomies::default());
    }

    #[test]
    fn test_homepage_requires_object() {
        assert_eq!(homepage_from_setting(json!("hero")), Fallback::Default(None));

        let stored = homepage_from_setting(json!({ "hero": { "title": "Care, anywhere" } }));
        assert!(!stored.is_default());
        assert!(stored.into_inner().unwrap().contains_key("hero"));
    }
}
