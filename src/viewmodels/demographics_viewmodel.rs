// ============================================================================
// DEMOGRAPHICS VIEWMODEL - Agregados demográficos para los charts
// ============================================================================

use std::collections::HashMap;

use crate::charts::{build_chart, gender_template, ChartError, ChartSpec};
use crate::models::Person;
use crate::services::ApiClient;
use crate::state::SessionState;

pub struct DemographicsViewModel {
    session: SessionState,
}

impl DemographicsViewModel {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Conteo por género sobre la colección de personas. Las keys salen con
    /// las etiquetas de la plantilla; valores desconocidos se descartan.
    pub fn gender_counts(people: &[Person]) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for person in people {
            let label = match person.gender.as_deref() {
                Some(g) if g.eq_ignore_ascii_case("male") || g.eq_ignore_ascii_case("m") => "Male",
                Some(g) if g.eq_ignore_ascii_case("female") || g.eq_ignore_ascii_case("f") => {
                    "Female"
                }
                _ => continue,
            };
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Fetch de personas del nodo de la sesión + armado del chart de género.
    pub async fn load_gender_chart(&self) -> Result<ChartSpec, String> {
        let api = ApiClient::from_session(&self.session);
        let people = api.fetch_people().await?;
        log::info!("📊 [DEMOGRAPHICS] {} personas recibidas", people.len());
        let counts = Self::gender_counts(&people);
        Ok(Self::chart_from_counts(counts))
    }

    /// Armar el ChartSpec aplicando la política de fallback: una categoría
    /// inválida es un fault de configuración, se loguea y se renderiza con
    /// las categorías válidas en cero/valor según corresponda.
    pub fn chart_from_counts(mut counts: HashMap<String, u64>) -> ChartSpec {
        let template = gender_template();
        match build_chart(&template, &counts) {
            Ok(spec) => spec,
            Err(ChartError::InvalidCategory(key)) => {
                log::error!(
                    "❌ [DEMOGRAPHICS] Categoría inválida '{}' en los datos del nodo, descartando",
                    key
                );
                counts.retain(|k, _| template.categories.iter().any(|c| c == k));
                // Tras filtrar, todas las keys pertenecen a la plantilla
                build_chart(&template, &counts).unwrap_or_else(|_| ChartSpec {
                    kind: template.kind,
                    label: template.label.clone(),
                    categories: template.categories.clone(),
                    values: vec![0; template.categories.len()],
                    style: template.style.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, gender: Option<&str>) -> Person {
        Person {
            id: id.to_string(),
            gender: gender.map(|g| g.to_string()),
            active: Some(true),
        }
    }

    #[test]
    fn counts_map_gender_variants_to_template_labels() {
        let people = vec![
            person("a", Some("male")),
            person("b", Some("F")),
            person("c", Some("female")),
            person("d", Some("m")),
            person("e", None),
            person("f", Some("unknown")),
        ];
        let counts = DemographicsViewModel::gender_counts(&people);
        assert_eq!(counts.get("Male"), Some(&2));
        assert_eq!(counts.get("Female"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn chart_from_counts_builds_in_template_order() {
        let mut counts = HashMap::new();
        counts.insert("Female".to_string(), 7);
        counts.insert("Male".to_string(), 3);
        let spec = DemographicsViewModel::chart_from_counts(counts);
        assert_eq!(spec.values, vec![3, 7]);
    }

    #[test]
    fn invalid_category_falls_back_to_valid_categories() {
        let mut counts = HashMap::new();
        counts.insert("Male".to_string(), 5);
        counts.insert("Other".to_string(), 1);
        let spec = DemographicsViewModel::chart_from_counts(counts);
        assert_eq!(spec.values, vec![5, 0]);
    }

    #[test]
    fn empty_collection_renders_zero_filled() {
        let spec = DemographicsViewModel::chart_from_counts(HashMap::new());
        assert_eq!(spec.values, vec![0, 0]);
    }
}
