//! Crane specification storage
//!
//! The engine never reads a repository; callers look a specification up and
//! hand it to `evaluate`. A specification file is TOML with one `[[crane]]`
//! table per entry:
//!
//! ```toml
//! [[crane]]
//! id = "yard-mobile-50"
//! crane_type = "mobile"
//! gross_capacity = { value = 50.0, unit = "t" }
//! load_radius = { value = 12.0, unit = "m" }
//! boom_length = { value = 30.0, unit = "m" }
//! counterweight = { value = 15000.0, unit = "kg" }
//! wind_speed = { value = 15.0, unit = "km/h" }
//! safety_factor = 1.25
//! operational_limit_percent = 85.0
//! ```

use crate::equipment::{
    CraneSpecification, CraneType, EnvironmentalConditions, GroundConditions, SafetyPolicy,
    Visibility,
};
use crate::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Crane specification not found: {0}")]
    NotFound(String),

    #[error("Duplicate crane specification id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unit conversion error in '{id}': {source}")]
    Unit {
        id: String,
        #[source]
        source: UnitError,
    },
}

pub trait SpecificationRepository {
    fn get(&self, id: &str) -> Result<CraneSpecification, RepositoryError>;

    /// Stored ids, sorted
    fn ids(&self) -> Vec<String>;

    /// Insert or replace a specification
    fn save(&mut self, id: String, spec: CraneSpecification) -> Result<(), RepositoryError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySpecificationRepository {
    specs: BTreeMap<String, CraneSpecification>,
}

impl InMemorySpecificationRepository {
    pub fn new() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, RepositoryError> {
        let file: SpecificationFile = toml::from_str(toml_str)?;
        let mut repo = Self::new();

        for entry in file.crane {
            let id = entry.id.clone();
            if repo.specs.contains_key(&id) {
                return Err(RepositoryError::DuplicateId(id));
            }
            let spec = entry
                .into_specification()
                .map_err(|source| RepositoryError::Unit { id: id.clone(), source })?;
            repo.specs.insert(id, spec);
        }

        Ok(repo)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let repo = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = repo.len(),
            "loaded crane specifications"
        );
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl SpecificationRepository for InMemorySpecificationRepository {
    fn get(&self, id: &str) -> Result<CraneSpecification, RepositoryError> {
        self.specs
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn ids(&self) -> Vec<String> {
        self.specs.keys().cloned().collect()
    }

    fn save(&mut self, id: String, spec: CraneSpecification) -> Result<(), RepositoryError> {
        self.specs.insert(id, spec);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SpecificationFile {
    #[serde(default)]
    crane: Vec<SpecificationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecificationEntry {
    id: String,
    crane_type: CraneType,
    gross_capacity: MassValue,
    load_radius: LengthValue,
    boom_length: Option<LengthValue>,
    counterweight: Option<MassValue>,
    wind_speed: Option<VelocityValue>,
    temperature: Option<TemperatureValue>,
    ground_conditions: Option<GroundConditions>,
    visibility: Option<Visibility>,
    safety_factor: Option<f64>,
    operational_limit_percent: Option<f64>,
}

impl SpecificationEntry {
    fn into_specification(self) -> Result<CraneSpecification, UnitError> {
        let calm = EnvironmentalConditions::calm();
        let default_policy = SafetyPolicy::default();

        let environmental = EnvironmentalConditions {
            wind_speed: self
                .wind_speed
                .map(|v| v.to_velocity())
                .transpose()?
                .unwrap_or(calm.wind_speed),
            temperature: self
                .temperature
                .map(|t| t.to_temperature())
                .transpose()?
                .unwrap_or(calm.temperature),
            ground_conditions: self.ground_conditions.unwrap_or(calm.ground_conditions),
            visibility: self.visibility.unwrap_or(calm.visibility),
        };

        Ok(CraneSpecification {
            crane_type: self.crane_type,
            gross_capacity: self.gross_capacity.to_mass()?,
            load_radius: self.load_radius.to_length()?,
            boom_length: self.boom_length.map(|b| b.to_length()).transpose()?,
            counterweight: self
                .counterweight
                .map(|c| c.to_mass())
                .transpose()?
                .unwrap_or(Mass::new::<kilogram>(0.0)),
            environmental,
            safety_policy: SafetyPolicy {
                safety_factor: self.safety_factor.unwrap_or(default_policy.safety_factor),
                operational_limit_percent: self
                    .operational_limit_percent
                    .unwrap_or(default_policy.operational_limit_percent),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const YARD: &str = r#"
        [[crane]]
        id = "yard-mobile-50"
        crane_type = "mobile"
        gross_capacity = { value = 50.0, unit = "t" }
        load_radius = { value = 12.0, unit = "m" }
        boom_length = { value = 30.0, unit = "m" }
        counterweight = { value = 15000.0, unit = "kg" }
        wind_speed = { value = 15.0, unit = "km/h" }
        ground_conditions = "compacted"
        safety_factor = 1.25
        operational_limit_percent = 85.0

        [[crane]]
        id = "bay-2-overhead"
        crane_type = "overhead"
        gross_capacity = { value = 20.0, unit = "t" }
        load_radius = { value = 3.0, unit = "m" }
    "#;

    #[test]
    fn test_parse_specifications() {
        let repo = InMemorySpecificationRepository::from_toml_str(YARD).unwrap();
        assert_eq!(repo.ids(), vec!["bay-2-overhead", "yard-mobile-50"]);

        let mobile = repo.get("yard-mobile-50").unwrap();
        assert_eq!(mobile.crane_type, CraneType::Mobile);
        assert_relative_eq!(tonnes(mobile.gross_capacity), 50.0, epsilon = 1e-9);
        assert_relative_eq!(tonnes(mobile.counterweight), 15.0, epsilon = 1e-9);
        assert_relative_eq!(
            mobile.environmental.wind_speed.get::<kilometer_per_hour>(),
            15.0,
            epsilon = 1e-9
        );
        assert_eq!(mobile.environmental.ground_conditions, GroundConditions::Compacted);
        assert!(mobile.boom_length.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let repo = InMemorySpecificationRepository::from_toml_str(YARD).unwrap();
        let overhead = repo.get("bay-2-overhead").unwrap();

        assert!(overhead.boom_length.is_none());
        assert_eq!(tonnes(overhead.counterweight), 0.0);
        assert_eq!(overhead.safety_policy, SafetyPolicy::default());
        assert_eq!(overhead.environmental, EnvironmentalConditions::calm());
    }

    #[test]
    fn test_not_found() {
        let repo = InMemorySpecificationRepository::new();
        assert!(matches!(repo.get("nope"), Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doc = r#"
            [[crane]]
            id = "a"
            crane_type = "jib"
            gross_capacity = { value = 2.0, unit = "t" }
            load_radius = { value = 4.0, unit = "m" }

            [[crane]]
            id = "a"
            crane_type = "jib"
            gross_capacity = { value = 3.0, unit = "t" }
            load_radius = { value = 4.0, unit = "m" }
        "#;
        assert!(matches!(
            InMemorySpecificationRepository::from_toml_str(doc),
            Err(RepositoryError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_bad_unit_names_entry() {
        let doc = r#"
            [[crane]]
            id = "odd"
            crane_type = "monorail"
            gross_capacity = { value = 2.0, unit = "hundredweight" }
            load_radius = { value = 4.0, unit = "m" }
        "#;
        match InMemorySpecificationRepository::from_toml_str(doc) {
            Err(RepositoryError::Unit { id, .. }) => assert_eq!(id, "odd"),
            other => panic!("expected unit error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_replaces() {
        let mut repo = InMemorySpecificationRepository::from_toml_str(YARD).unwrap();
        let mut spec = repo.get("bay-2-overhead").unwrap();
        spec.gross_capacity = Mass::new::<metric_ton>(25.0);

        repo.save("bay-2-overhead".into(), spec).unwrap();
        assert_eq!(repo.len(), 2);
        assert_relative_eq!(
            tonnes(repo.get("bay-2-overhead").unwrap().gross_capacity),
            25.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YARD.as_bytes()).unwrap();

        let repo = InMemorySpecificationRepository::from_toml_file(file.path()).unwrap();
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }
}
