//! Analyzed CV data returned by the resume endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The analyzed CV, as produced by the backend's parsing pipeline.
///
/// Section names are the backend's. Analysis sections this client does not
/// interpret (experience, education, ...) are carried in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(rename = "informations_personnelles", default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalInfo>,
    #[serde(rename = "compétences", default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contact details extracted from the CV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(rename = "nom", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "numero_de_telephone", default)]
    pub phone: Option<String>,
    #[serde(rename = "localisation", default)]
    pub location: Option<String>,
}

/// Skills extracted from the CV, split the way the analyzer splits them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

/// Backend acknowledgment for an upload; the shape is backend-defined.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_parses_backend_sections() {
        let json = r#"{
            "informations_personnelles": {
                "nom": "Ana Diaz",
                "email": "ana@example.com",
                "numero_de_telephone": "+33 6 00 00 00 00",
                "localisation": "Paris"
            },
            "compétences": {
                "hard_skills": ["Python", "SQL"],
                "soft_skills": ["Communication"]
            },
            "formation": [{"diplome": "MSc"}]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        let personal = resume.personal.unwrap();
        assert_eq!(personal.name.as_deref(), Some("Ana Diaz"));
        assert_eq!(personal.location.as_deref(), Some("Paris"));
        let skills = resume.skills.unwrap();
        assert_eq!(skills.hard_skills, vec!["Python", "SQL"]);
        // Sections the client does not interpret are preserved
        assert!(resume.extra.contains_key("formation"));
    }

    #[test]
    fn test_resume_tolerates_empty_object() {
        let resume: ResumeData = serde_json::from_str("{}").unwrap();
        assert!(resume.personal.is_none());
        assert!(resume.skills.is_none());
    }
}
