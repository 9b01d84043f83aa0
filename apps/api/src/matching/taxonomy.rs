//! Field Classifier — maps a job's free-text title/description to one coarse
//! field-of-work category.
//!
//! Classification is first-match-wins over `FIELD_TAXONOMY`: categories are
//! scanned in table order, keywords in list order, and the first keyword found
//! (case-insensitive substring) decides. Reordering the table changes results.
//! Markup in descriptions is matched as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Technology,
    Business,
    Healthcare,
    Education,
    Engineering,
    Agriculture,
    Hospitality,
    Media,
    General,
}

/// Ordered (category, keywords) table scanned by `classify_job_field`.
/// `General` has no keywords; it is the fallback.
pub const FIELD_TAXONOMY: &[(FieldCategory, &[&str])] = &[
    (
        FieldCategory::Technology,
        &[
            "software",
            "developer",
            "programming",
            "computer",
            "information technology",
            "data",
            "web",
            "tech",
        ],
    ),
    (
        FieldCategory::Business,
        &[
            "business",
            "marketing",
            "sales",
            "finance",
            "accounting",
            "management",
            "economics",
        ],
    ),
    (
        FieldCategory::Healthcare,
        &[
            "health",
            "medical",
            "nursing",
            "nurse",
            "hospital",
            "clinic",
            "pharmacy",
        ],
    ),
    (
        FieldCategory::Education,
        &["education", "teaching", "teacher", "school", "tutor", "lecturer"],
    ),
    (
        FieldCategory::Engineering,
        &["engineering", "engineer", "mechanical", "electrical", "civil"],
    ),
    (
        FieldCategory::Agriculture,
        &["agriculture", "agribusiness", "farming", "farm", "crop", "livestock"],
    ),
    (
        FieldCategory::Hospitality,
        &["hospitality", "hotel", "restaurant", "tourism", "catering", "chef"],
    ),
    (
        FieldCategory::Media,
        &["media", "journalism", "communication", "broadcast", "design", "film"],
    ),
];

impl FieldCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FieldCategory::Technology => "technology",
            FieldCategory::Business => "business",
            FieldCategory::Healthcare => "healthcare",
            FieldCategory::Education => "education",
            FieldCategory::Engineering => "engineering",
            FieldCategory::Agriculture => "agriculture",
            FieldCategory::Hospitality => "hospitality",
            FieldCategory::Media => "media",
            FieldCategory::General => "general",
        }
    }

    /// Keywords associated with this category, in scan order.
    pub fn keywords(&self) -> &'static [&'static str] {
        FIELD_TAXONOMY
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Parses a stored category tag. Unknown tags return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label == FieldCategory::General.label() {
            return Some(FieldCategory::General);
        }
        FIELD_TAXONOMY
            .iter()
            .map(|(category, _)| *category)
            .find(|category| category.label() == label)
    }
}

impl std::fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a job by its title and description. Never fails; returns
/// `FieldCategory::General` when no keyword matches.
pub fn classify_job_field(title: &str, description: Option<&str>) -> FieldCategory {
    let haystack = format!("{} {}", title, description.unwrap_or_default()).to_lowercase();

    for (category, keywords) in FIELD_TAXONOMY {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *category;
        }
    }

    FieldCategory::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_developer_is_technology() {
        assert_eq!(
            classify_job_field("Junior Software Developer", None),
            FieldCategory::Technology
        );
    }

    #[test]
    fn test_hospital_is_healthcare() {
        let category = classify_job_field(
            "Ward Assistant",
            Some("<p>Join our busy <b>hospital</b> team.</p>"),
        );
        assert_eq!(category, FieldCategory::Healthcare);
    }

    #[test]
    fn test_no_keyword_is_general() {
        assert_eq!(
            classify_job_field("Warehouse Picker", Some("Night shifts available.")),
            FieldCategory::General
        );
    }

    #[test]
    fn test_empty_input_is_general() {
        assert_eq!(classify_job_field("", None), FieldCategory::General);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            classify_job_field("FARM MANAGER", None),
            FieldCategory::Agriculture
        );
    }

    #[test]
    fn test_earlier_category_wins_over_later() {
        // "data" (technology) precedes "hotel" (hospitality) in table order.
        assert_eq!(
            classify_job_field("Hotel data analyst", None),
            FieldCategory::Technology
        );
    }

    #[test]
    fn test_description_alone_can_classify() {
        assert_eq!(
            classify_job_field("Volunteer", Some("Support local school outreach")),
            FieldCategory::Education
        );
    }

    #[test]
    fn test_markup_is_not_stripped() {
        // The tag name itself contains a taxonomy keyword.
        assert_eq!(
            classify_job_field("Cashier", Some("<section data-role=\"x\">Till work</section>")),
            FieldCategory::Technology
        );
    }

    #[test]
    fn test_keywords_lookup_follows_table() {
        assert_eq!(FieldCategory::Technology.keywords()[0], "software");
        assert!(FieldCategory::General.keywords().is_empty());
    }

    #[test]
    fn test_from_label_round_trips_known_tags() {
        for (category, _) in FIELD_TAXONOMY {
            assert_eq!(FieldCategory::from_label(category.label()), Some(*category));
        }
        assert_eq!(
            FieldCategory::from_label(" General "),
            Some(FieldCategory::General)
        );
        assert_eq!(FieldCategory::from_label("astrology"), None);
    }
}
