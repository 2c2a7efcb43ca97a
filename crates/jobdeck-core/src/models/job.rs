//! Job postings from the listings endpoint.

use serde::{Deserialize, Serialize};

/// One job posting from `GET /jobs/`.
///
/// Wire names are the backend's (French); they are mapped to English field
/// names here. Everything except the id is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(rename = "entreprise", default)]
    pub company: Option<String>,
    #[serde(rename = "ville", default)]
    pub city: Option<String>,
    #[serde(rename = "poste", default)]
    pub title: Option<String>,
    #[serde(rename = "contrat", default)]
    pub contract: Option<String>,
    #[serde(rename = "description_poste", default)]
    pub description: Option<String>,
    #[serde(rename = "publication", default)]
    pub published: Option<String>,
    #[serde(rename = "lien", default)]
    pub url: Option<String>,
    #[serde(rename = "description_nettoyee", default)]
    pub clean_description: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(rename = "profil_recherche", default)]
    pub desired_profile: Option<String>,
    #[serde(rename = "competences", default)]
    pub skills: Option<String>,
    #[serde(rename = "pole", default)]
    pub sector: Option<String>,
}

impl Job {
    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    /// "Company - City", dropping whichever side is missing.
    pub fn location_display(&self) -> String {
        match (self.company.as_deref(), self.city.as_deref()) {
            (Some(company), Some(city)) => format!("{} - {}", company, city),
            (Some(company), None) => company.to_string(),
            (None, Some(city)) => city.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_parses_backend_field_names() {
        let json = r#"{
            "id": "j-42",
            "entreprise": "Acme",
            "ville": "Lyon",
            "poste": "Data Engineer",
            "contrat": "CDI",
            "publication": "2025-06-12",
            "lien": "https://jobs.example.com/j-42",
            "profil_recherche": "3+ years of Python",
            "pole": "Data"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "j-42");
        assert_eq!(job.company.as_deref(), Some("Acme"));
        assert_eq!(job.title.as_deref(), Some("Data Engineer"));
        assert_eq!(job.desired_profile.as_deref(), Some("3+ years of Python"));
        assert_eq!(job.sector.as_deref(), Some("Data"));
        // Fields the listing omitted stay None
        assert_eq!(job.mission, None);
    }

    #[test]
    fn test_job_serializes_back_to_wire_names() {
        let job = Job {
            id: "j-1".to_string(),
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["entreprise"], "Acme");
        assert!(value.get("company").is_none());
    }

    #[test]
    fn test_location_display_drops_missing_sides() {
        let mut job = Job {
            id: "j-1".to_string(),
            company: Some("Acme".to_string()),
            city: Some("Lyon".to_string()),
            ..Default::default()
        };
        assert_eq!(job.location_display(), "Acme - Lyon");
        job.city = None;
        assert_eq!(job.location_display(), "Acme");
        job.company = None;
        assert_eq!(job.location_display(), "");
    }
}
