use crate::common::*;

#[doc = "Search algorithm a result collection was produced by. The label is attached per collection, never per row."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Seeded DynaMOSA")]
    SeededDynamosa,
    #[serde(rename = "DynaMOSA")]
    Dynamosa,
    #[serde(rename = "Seeded Random Search")]
    SeededRandomSearch,
    #[serde(rename = "Random Search")]
    RandomSearch,
}

impl Algorithm {
    /* Fetch order of the result collections */
    pub const SOURCES: [Algorithm; 4] = [
        Algorithm::SeededRandomSearch,
        Algorithm::RandomSearch,
        Algorithm::SeededDynamosa,
        Algorithm::Dynamosa,
    ];

    #[doc = "Name of the result collection this algorithm's runs are stored in"]
    pub fn collection_name(&self) -> &'static str {
        match self {
            Algorithm::SeededDynamosa => "seeded_dynamosa",
            Algorithm::Dynamosa => "dynamosa",
            Algorithm::SeededRandomSearch => "seeded_random",
            Algorithm::RandomSearch => "random",
        }
    }

    #[doc = "Table name of the collection, e.g. `experiments_dynamosa`"]
    pub fn table_name(&self, table_prefix: &str) -> String {
        format!("{}{}", table_prefix, self.collection_name())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::SeededDynamosa => "Seeded DynaMOSA",
            Algorithm::Dynamosa => "DynaMOSA",
            Algorithm::SeededRandomSearch => "Seeded Random Search",
            Algorithm::RandomSearch => "Random Search",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_source_maps_to_its_own_table_and_label() {
        let mapping: Vec<(String, &str)> = Algorithm::SOURCES
            .iter()
            .map(|a| (a.table_name("experiments_"), a.label()))
            .collect();

        assert_eq!(
            mapping,
            vec![
                ("experiments_seeded_random".to_string(), "Seeded Random Search"),
                ("experiments_random".to_string(), "Random Search"),
                ("experiments_seeded_dynamosa".to_string(), "Seeded DynaMOSA"),
                ("experiments_dynamosa".to_string(), "DynaMOSA"),
            ]
        );
    }

    #[test]
    fn serde_uses_display_labels() {
        let json: String = serde_json::to_string(&Algorithm::SeededRandomSearch).unwrap();
        assert_eq!(json, "\"Seeded Random Search\"");

        let parsed: Algorithm = serde_json::from_str("\"DynaMOSA\"").unwrap();
        assert_eq!(parsed, Algorithm::Dynamosa);
        assert_eq!(parsed.to_string(), "DynaMOSA");
    }
}
