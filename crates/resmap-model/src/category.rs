//! The canonical category set for consolidated resource directories.

use std::fmt;

use serde::{Serialize, Serializer};

/// Canonical resource categories after consolidation.
///
/// Legacy directory exports carry a wider, drifting set of category strings;
/// the normalizer maps every record onto exactly one of these 15 values. The
/// variant order is the canonical enumeration order used by the summary
/// report and the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    CrisisServices,
    FoodServices,
    HousingServices,
    HealthcareServices,
    MentalHealthSubstanceUse,
    GovernmentServices,
    TribalServices,
    CommunityServices,
    CommunityGroupsDevelopment,
    FaithBasedServices,
    LegalServices,
    LawEnforcement,
    Education,
    Pharmacy,
    CulturalInformationServices,
}

impl Category {
    /// Every canonical category, in enumeration order.
    pub const ALL: [Category; 15] = [
        Category::CrisisServices,
        Category::FoodServices,
        Category::HousingServices,
        Category::HealthcareServices,
        Category::MentalHealthSubstanceUse,
        Category::GovernmentServices,
        Category::TribalServices,
        Category::CommunityServices,
        Category::CommunityGroupsDevelopment,
        Category::FaithBasedServices,
        Category::LegalServices,
        Category::LawEnforcement,
        Category::Education,
        Category::Pharmacy,
        Category::CulturalInformationServices,
    ];

    /// Returns the canonical name as written in the directory table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CrisisServices => "Crisis Services",
            Category::FoodServices => "Food Services",
            Category::HousingServices => "Housing Services",
            Category::HealthcareServices => "Healthcare Services",
            Category::MentalHealthSubstanceUse => "Mental Health & Substance Use",
            Category::GovernmentServices => "Government Services",
            Category::TribalServices => "Tribal Services",
            Category::CommunityServices => "Community Services",
            Category::CommunityGroupsDevelopment => "Community Groups & Development",
            Category::FaithBasedServices => "Faith-Based Services",
            Category::LegalServices => "Legal Services",
            Category::LawEnforcement => "Law Enforcement",
            Category::Education => "Education",
            Category::Pharmacy => "Pharmacy",
            Category::CulturalInformationServices => "Cultural & Information Services",
        }
    }

    /// Exact membership test against the canonical set.
    ///
    /// Matching is case-sensitive: any spelling drift falls through to the
    /// classifier's unmapped fallback instead of being accepted here.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
