//! FrameworkOutput - the ordered section map returned to clients.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Section name to insights mapping that keeps sections in template order.
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameworkOutput {
    sections: Vec<(String, Vec<String>)>,
}

impl FrameworkOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section, or replaces the insights of an existing one in place.
    pub fn push_section(&mut self, name: impl Into<String>, insights: Vec<String>) {
        let name = name.into();
        match self.sections.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, current)) => *current = insights,
            None => self.sections.push((name, insights)),
        }
    }

    /// Builder-style variant of [`FrameworkOutput::push_section`].
    pub fn with_section(mut self, name: impl Into<String>, insights: Vec<String>) -> Self {
        self.push_section(name, insights);
        self
    }

    /// Returns the insights for a section.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, insights)| insights.as_slice())
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(name, insights)| (name.as_str(), insights.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for FrameworkOutput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, insights) in &self.sections {
            map.serialize_entry(name, insights)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_insertion_order_when_serialized() {
        let output = FrameworkOutput::new()
            .with_section("Zeta", strings(&["last letter"]))
            .with_section("Alpha", strings(&["first letter"]));

        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"Zeta":["last letter"],"Alpha":["first letter"]}"#);
    }

    #[test]
    fn push_existing_section_replaces_in_place() {
        let mut output = FrameworkOutput::new()
            .with_section("A", strings(&["one"]))
            .with_section("B", strings(&["two"]));

        output.push_section("A", strings(&["uno"]));

        assert_eq!(output.len(), 2);
        assert_eq!(output.section_names(), vec!["A", "B"]);
        assert_eq!(output.get("A"), Some(&["uno".to_string()][..]));
    }

    #[test]
    fn get_missing_section_is_none() {
        let output = FrameworkOutput::new();
        assert!(output.is_empty());
        assert!(output.get("Strengths").is_none());
    }
}
