//! Disease table and symptom index.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::{normalize_symptom, CatalogError, DiseaseRecord};

/// The disease table and the phrase → disease-name index, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    diseases: Vec<DiseaseRecord>,
    symptoms: HashMap<String, String>,
    conflicts: Vec<CatalogError>,
}

impl Catalog {
    /// Builds a catalog, normalizing every symptom phrase.
    ///
    /// When two phrases normalize to the same key the first mapping is kept and
    /// the collision is reported by [`Catalog::validate`]. Call it before
    /// serving from a catalog that came from configuration.
    pub fn new<I, K, V>(diseases: Vec<DiseaseRecord>, symptoms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut index = HashMap::new();
        let mut conflicts = Vec::new();

        for (phrase, disease) in symptoms {
            let disease: String = disease.into();
            match index.entry(normalize_symptom(phrase.as_ref())) {
                Entry::Vacant(slot) => {
                    slot.insert(disease);
                }
                Entry::Occupied(slot) => conflicts.push(CatalogError::ConflictingSymptom {
                    symptom: slot.key().clone(),
                    first: slot.get().clone(),
                    second: disease,
                }),
            }
        }

        Self {
            diseases,
            symptoms: index,
            conflicts,
        }
    }

    /// Checks that disease names are unique, no two phrases collapse onto the
    /// same key, and every indexed phrase points at a known disease.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::with_capacity(self.diseases.len());
        for record in &self.diseases {
            if !names.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateDisease(record.name.clone()));
            }
        }

        if let Some(conflict) = self.conflicts.first() {
            return Err(conflict.clone());
        }

        let mut phrases: Vec<_> = self.symptoms.iter().collect();
        phrases.sort();

        for (symptom, disease) in phrases {
            if symptom.is_empty() {
                return Err(CatalogError::EmptySymptom(disease.clone()));
            }
            if !names.contains(disease.as_str()) {
                return Err(CatalogError::DanglingSymptom {
                    symptom: symptom.clone(),
                    disease: disease.clone(),
                });
            }
        }

        Ok(())
    }

    /// Looks up a disease record by exact name.
    pub fn disease(&self, name: &str) -> Option<&DiseaseRecord> {
        self.diseases.iter().find(|d| d.name == name)
    }

    /// Disease name indexed under an already-normalized key.
    pub fn disease_for(&self, key: &str) -> Option<&str> {
        self.symptoms.get(key).map(String::as_str)
    }

    pub fn symptoms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symptoms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DiseaseRecord {
        DiseaseRecord::new(name, format!("{name} description"), format!("{name} treatment"))
    }

    #[test]
    fn test_new_normalizes_phrases() {
        let catalog = Catalog::new(vec![record("Eczema")], [("  Itching ", "Eczema")]);
        assert_eq!(catalog.disease_for("itching"), Some("Eczema"));
        assert_eq!(catalog.disease_for("  Itching "), None);
    }

    #[test]
    fn test_validate_ok() {
        let catalog = Catalog::new(
            vec![record("Eczema"), record("Acne")],
            [("itching", "Eczema"), ("cystic acne", "Acne"), ("dry skin", "Eczema")],
        );
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.disease_count(), 2);
        assert_eq!(catalog.symptom_count(), 3);
    }

    #[test]
    fn test_validate_dangling_symptom() {
        let catalog = Catalog::new(vec![record("Eczema")], [("fever", "Flu")]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DanglingSymptom {
                symptom: "fever".into(),
                disease: "Flu".into(),
            })
        );
    }

    #[test]
    fn test_validate_duplicate_disease() {
        let catalog = Catalog::new(
            vec![record("Flu"), record("Flu")],
            std::iter::empty::<(&str, &str)>(),
        );
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateDisease("Flu".into()))
        );
    }

    #[test]
    fn test_validate_conflicting_symptom() {
        let catalog = Catalog::new(
            vec![record("Flu"), record("COVID-19")],
            [("Fever", "COVID-19"), (" fever", "Flu")],
        );
        assert_eq!(catalog.symptom_count(), 1);
        assert_eq!(catalog.disease_for("fever"), Some("COVID-19"));
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::ConflictingSymptom {
                symptom: "fever".into(),
                first: "COVID-19".into(),
                second: "Flu".into(),
            })
        );
    }

    #[test]
    fn test_validate_repeated_symptom_same_disease() {
        let catalog = Catalog::new(vec![record("Flu")], [("fever", "Flu"), ("FEVER", "Flu")]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ConflictingSymptom { .. })
        ));
    }

    #[test]
    fn test_validate_empty_symptom() {
        let catalog = Catalog::new(vec![record("Flu")], [("   ", "Flu")]);
        assert_eq!(catalog.validate(), Err(CatalogError::EmptySymptom("Flu".into())));
    }

    #[test]
    fn test_disease_lookup_is_exact() {
        let catalog = Catalog::new(vec![record("COVID-19")], std::iter::empty::<(&str, &str)>());
        assert!(catalog.disease("COVID-19").is_some());
        assert!(catalog.disease("covid-19").is_none());
    }
}
