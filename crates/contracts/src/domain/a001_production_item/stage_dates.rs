use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Known production stages. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Fabric,
    Cutting,
    Sewing,
    Shipping,
    Other,
}

impl StageKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "fabric" => StageKind::Fabric,
            "cutting" => StageKind::Cutting,
            "sewing" => StageKind::Sewing,
            "shipping" => StageKind::Shipping,
            _ => StageKind::Other,
        }
    }

    /// Canonical key, `None` for unknown stages
    pub fn key(&self) -> Option<&'static str> {
        match self {
            StageKind::Fabric => Some("fabric"),
            StageKind::Cutting => Some("cutting"),
            StageKind::Sewing => Some("sewing"),
            StageKind::Shipping => Some("shipping"),
            StageKind::Other => None,
        }
    }

    pub fn canonical() -> [StageKind; 4] {
        [
            StageKind::Fabric,
            StageKind::Cutting,
            StageKind::Sewing,
            StageKind::Shipping,
        ]
    }
}

/// Stage name -> date mapping of an order.
///
/// Entries keep the key order of the JSON object they were decoded from.
/// A `null` date is kept as an entry without a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageDates(Vec<(String, Option<String>)>);

impl StageDates {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a stage date, replacing an existing entry in place
    pub fn insert(&mut self, stage: impl Into<String>, date: Option<String>) {
        let stage = stage.into();
        match self.0.iter_mut().find(|(name, _)| *name == stage) {
            Some(entry) => entry.1 = date,
            None => self.0.push((stage, date)),
        }
    }

    pub fn get(&self, stage: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == stage)
            .and_then(|(_, date)| date.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(name, date)| (name.as_str(), date.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for StageDates {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        let mut dates = StageDates::new();
        for (stage, date) in iter {
            dates.insert(stage, date);
        }
        dates
    }
}

impl Serialize for StageDates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stage, date) in &self.0 {
            map.serialize_entry(stage, date)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StageDates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StageDatesVisitor;

        impl<'de> Visitor<'de> for StageDatesVisitor {
            type Value = StageDates;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of stage names to dates")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut dates = StageDates(Vec::with_capacity(access.size_hint().unwrap_or(4)));
                while let Some((stage, date)) = access.next_entry::<String, Option<String>>()? {
                    dates.insert(stage, date);
                }
                Ok(dates)
            }
        }

        deserializer.deserialize_map(StageDatesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_source_order() {
        let dates: StageDates =
            serde_json::from_str(r#"{"shipping":"2024-02-01","fabric":"2024-01-15","qc":null}"#)
                .unwrap();
        let names: Vec<&str> = dates.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["shipping", "fabric", "qc"]);
        assert_eq!(dates.get("fabric"), Some("2024-01-15"));
        assert_eq!(dates.get("qc"), None);
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn test_empty_map() {
        let dates: StageDates = serde_json::from_str("{}").unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut dates = StageDates::new();
        dates.insert("fabric", None);
        dates.insert("cutting", Some("2024-01-20".into()));
        dates.insert("fabric", Some("2024-01-15".into()));
        let entries: Vec<_> = dates.iter().collect();
        assert_eq!(
            entries,
            vec![("fabric", Some("2024-01-15")), ("cutting", Some("2024-01-20"))]
        );
    }

    #[test]
    fn test_stage_kind() {
        assert_eq!(StageKind::from_name("Sewing"), StageKind::Sewing);
        assert_eq!(StageKind::from_name("dyeing"), StageKind::Other);
        assert_eq!(StageKind::Other.key(), None);
        assert_eq!(StageKind::Shipping.key(), Some("shipping"));
    }
}
