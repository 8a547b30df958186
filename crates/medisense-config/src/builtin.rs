//! Catalog shipped with the service.

use medisense_core::{Catalog, DiseaseRecord};

const DISEASES: &[(&str, &str, &str)] = &[
    (
        "Acne",
        "Acne is a skin condition that occurs when hair follicles are clogged with oil and dead skin cells.",
        "Over-the-counter creams, prescription medications, and lifestyle changes.",
    ),
    (
        "Psoriasis",
        "Psoriasis is an autoimmune disease that causes skin cells to multiply too quickly, resulting in thick, scaly patches.",
        "Topical treatments, phototherapy, and systemic medications.",
    ),
    (
        "Eczema",
        "Eczema is a condition that makes the skin red, inflamed, and itchy, often due to an allergic reaction.",
        "Moisturizers, corticosteroids, and antihistamines.",
    ),
    (
        "Melanoma",
        "Melanoma is a type of skin cancer that develops from pigment-producing cells.",
        "Surgical removal, immunotherapy, chemotherapy, and targeted therapies.",
    ),
    (
        "Rosacea",
        "Rosacea is a chronic condition that causes redness and visible blood vessels on the face.",
        "Topical medications, oral antibiotics, and laser therapy.",
    ),
    (
        "Common Cold",
        "A viral infection of the upper respiratory tract that leads to symptoms like a runny nose, cough, and fever.",
        "Rest, hydration, over-the-counter decongestants, and pain relievers.",
    ),
    (
        "Flu",
        "A contagious respiratory illness caused by influenza viruses, often involving fever, cough, and body aches.",
        "Rest, antiviral medications, fluids, and fever relievers.",
    ),
    (
        "COVID-19",
        "A contagious disease caused by the SARS-CoV-2 virus, symptoms can range from mild to severe, including fever, cough, and difficulty breathing.",
        "Hospitalization for severe cases, oxygen therapy, antiviral treatments, and vaccines.",
    ),
];

// Several phrases are shared by more than one condition; each maps to one.
const SYMPTOMS: &[(&str, &str)] = &[
    ("redness", "Rosacea"),
    ("scaly patches", "Psoriasis"),
    ("itching", "Eczema"),
    ("cystic acne", "Acne"),
    ("pigmented moles", "Melanoma"),
    ("runny nose", "Common Cold"),
    ("cough", "Common Cold"),
    ("fever", "Flu"),
    ("body aches", "Flu"),
    ("shortness of breath", "COVID-19"),
    ("difficulty breathing", "COVID-19"),
    ("sore throat", "Common Cold"),
    ("fatigue", "COVID-19"),
];

/// Builds the built-in catalog.
pub fn builtin_catalog() -> Catalog {
    let diseases = DISEASES
        .iter()
        .map(|&(name, description, treatment)| DiseaseRecord::new(name, description, treatment))
        .collect();

    Catalog::new(diseases, SYMPTOMS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisense_core::ResolveError;

    #[test]
    fn test_builtin_is_consistent() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.disease_count(), 8);
        assert_eq!(catalog.symptom_count(), 13);
    }

    #[test]
    fn test_every_builtin_phrase_resolves() {
        let catalog = builtin_catalog();
        for &(phrase, disease) in SYMPTOMS {
            let record = catalog.resolve(&[phrase]).unwrap();
            assert_eq!(record.name, disease);
        }
    }

    #[test]
    fn test_redness_is_rosacea() {
        let catalog = builtin_catalog();
        let record = catalog.resolve(&["Redness"]).unwrap();
        assert_eq!(record.name, "Rosacea");
        assert_eq!(
            record.description,
            "Rosacea is a chronic condition that causes redness and visible blood vessels on the face."
        );
    }

    #[test]
    fn test_builtin_joined_phrase_not_recognized() {
        let catalog = builtin_catalog();
        assert_eq!(
            catalog.resolve(&["fever", "cough"]),
            Err(ResolveError::NotRecognized)
        );
    }
}
