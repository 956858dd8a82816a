//! Fixed rule data: the migration map and the keyword tables.
//!
//! All of this is hand-authored configuration, not runtime state. Keyword
//! matching everywhere is case-insensitive substring containment against
//! already-lower-cased record fields.

use resmap_model::Category;

/// Legacy category → canonical category, exact keys.
///
/// Many-to-one; a handful of keys map to themselves so that the
/// tribal/government split still sees them as migrated.
pub const MIGRATION_MAP: [(&str, Category); 21] = [
    ("Healthcare/Treatment", Category::HealthcareServices),
    ("Healthcare/Medical", Category::HealthcareServices),
    ("Healthcare/Public Health", Category::HealthcareServices),
    ("Mental Health", Category::MentalHealthSubstanceUse),
    ("Government Services", Category::GovernmentServices),
    ("Government/Tribal Services", Category::GovernmentServices),
    ("Government & Tribal Services", Category::GovernmentServices),
    ("Community Services", Category::CommunityServices),
    ("Community Organizations", Category::CommunityGroupsDevelopment),
    ("Community Development", Category::CommunityGroupsDevelopment),
    ("Faith-Based Programs", Category::FaithBasedServices),
    ("Legal Services", Category::LegalServices),
    ("Law Enforcement", Category::LawEnforcement),
    ("Education", Category::Education),
    ("Housing Services", Category::HousingServices),
    ("Pharmacy", Category::Pharmacy),
    ("Cultural Services", Category::CulturalInformationServices),
    ("Labor Union", Category::CulturalInformationServices),
    ("Information/Referral", Category::CulturalInformationServices),
    ("Free Programs", Category::CommunityServices),
    ("Fee-Based Programs", Category::CommunityServices),
];

/// Look up a legacy category. `None` means identity mapping: the original
/// string carries through and is membership-checked by the fallback rule.
pub fn migrate(original: &str) -> Option<Category> {
    MIGRATION_MAP
        .iter()
        .find(|(legacy, _)| *legacy == original)
        .map(|(_, canonical)| *canonical)
}

/// Legacy names that migrate into `category`, excluding the canonical
/// name itself. Used by the `categories` listing.
pub fn legacy_sources(category: Category) -> Vec<&'static str> {
    MIGRATION_MAP
        .iter()
        .filter(|(legacy, canonical)| *canonical == category && *legacy != category.as_str())
        .map(|(legacy, _)| *legacy)
        .collect()
}

/// Service types that mark a crisis-flagged record as a mental-health or
/// substance-use service rather than a general crisis service.
pub const MENTAL_HEALTH_SERVICE_TYPES: [&str; 14] = [
    "mental health services",
    "substance abuse treatment",
    "mental health/addiction",
    "mental health/developmental services",
    "mental health/substance abuse",
    "addiction medicine",
    "behavioral health/medical",
    "behavioral health/peer support",
    "opioid treatment",
    "opioid recovery",
    "substance abuse prevention/recovery",
    "substance use prevention/recovery",
    "youth substance abuse prevention",
    "therapeutic foster care/behavioral health",
];

/// Food keywords matched against the services-offered text.
pub const FOOD_SERVICE_KEYWORDS: [&str; 6] =
    ["food", "meal", "pantry", "kitchen", "nutrition", "feeding"];

/// Food keywords matched against the organization name.
pub const FOOD_ORGANIZATION_KEYWORDS: [&str; 2] = ["food bank", "soup kitchen"];

/// Organization-name keywords that exempt a record from the food override
/// (twelve-step groups meet over meals without being food services).
pub const FOOD_EXEMPT_ORGANIZATION_KEYWORDS: [&str; 2] = ["anonymous", "al-anon"];
