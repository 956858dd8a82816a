//! The category classifier: an ordered chain of consolidation rules.
//!
//! `classify` is pure, total, and deterministic. It never fails; records
//! with categories outside the canonical set land on a fallback instead.
//! Diagnostics (tribal reclassification, unmapped fallback) go out as
//! `tracing` events and never influence the returned category.

use tracing::{debug, warn};

use resmap_model::{Category, RecordFields};

use crate::rules::{
    FOOD_EXEMPT_ORGANIZATION_KEYWORDS, FOOD_ORGANIZATION_KEYWORDS, FOOD_SERVICE_KEYWORDS,
    MENTAL_HEALTH_SERVICE_TYPES, migrate,
};

/// The rule that decided a record's category.
///
/// Reported alongside the category so callers (and tests) can see which
/// branch fired without installing a log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Crisis-flagged record routed by service type; bypasses every
    /// other rule.
    CrisisOverride,
    /// Static migration-map hit.
    Migration,
    /// No map entry; the original name was already canonical.
    Identity,
    /// Government records re-split on tribal keywords.
    TribalSplit,
    /// Food keywords in the services text or organization name.
    FoodOverride,
    /// Healthcare support groups reclassified as community services.
    SupportGroupCarveOut,
    /// Police or sheriff in the organization name.
    LawEnforcementOverride,
    /// Result was outside the canonical set.
    UnmappedFallback,
}

/// A classified record: the canonical category and the deciding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub rule: Rule,
}

impl Classification {
    fn new(category: Category, rule: Rule) -> Self {
        Classification { category, rule }
    }
}

/// Map one record's fields to exactly one canonical category.
///
/// Rule order is fixed and hand-authored; later rules override earlier
/// ones, except the crisis override which short-circuits. All keyword
/// matching is substring containment over lower-cased text, so e.g. an
/// organization named "Indiana Avenue Clinic" matches the `indian` tribal
/// keyword; that false-positive risk is inherent to the rule design.
pub fn classify(fields: &RecordFields<'_>) -> Classification {
    let original = fields.category;
    let organization = fields.organization.to_lowercase();
    let service_type = fields.service_type.to_lowercase();
    let services_offered = fields.services_offered.to_lowercase();
    let is_crisis = fields.crisis_service.to_lowercase() == "yes";

    // Rule 1: crisis override. A crisis-flagged record not already filed
    // under Crisis Services is routed by its service type and nothing
    // else gets a say.
    if is_crisis && original != Category::CrisisServices.as_str() {
        let category = if MENTAL_HEALTH_SERVICE_TYPES
            .iter()
            .any(|keyword| service_type.contains(keyword))
        {
            Category::MentalHealthSubstanceUse
        } else {
            Category::CrisisServices
        };
        return Classification::new(category, Rule::CrisisOverride);
    }

    // Rule 2: static migration. `None` keeps the original string, which
    // the fallback rule membership-checks at the end.
    let (mut resolved, mut rule) = match migrate(original) {
        Some(category) => (Some(category), Rule::Migration),
        None => (None, Rule::Identity),
    };

    // Rule 3: tribal/government split.
    if original == "Government/Tribal Services" || resolved == Some(Category::GovernmentServices) {
        let tribal = service_type.contains("tribal")
            || organization.contains("tribal")
            || organization.contains("tribe")
            || organization.contains("lumbee")
            || organization.contains("indian")
            || services_offered.contains("tribal");
        if tribal {
            debug!(
                organization = fields.organization,
                service_type = fields.service_type,
                "reclassifying as Tribal Services"
            );
            resolved = Some(Category::TribalServices);
        } else {
            resolved = Some(Category::GovernmentServices);
        }
        rule = Rule::TribalSplit;
    }

    // Rule 4: food-service override. Runs before the law-enforcement
    // override, so a legal-aid office that mentions a kitchen becomes a
    // food service unless rule 6 reclaims it.
    let food = FOOD_SERVICE_KEYWORDS
        .iter()
        .any(|keyword| services_offered.contains(keyword))
        || FOOD_ORGANIZATION_KEYWORDS
            .iter()
            .any(|keyword| organization.contains(keyword));
    if food {
        let exempt = service_type.contains("support group")
            || FOOD_EXEMPT_ORGANIZATION_KEYWORDS
                .iter()
                .any(|keyword| organization.contains(keyword));
        if !exempt {
            resolved = Some(Category::FoodServices);
            rule = Rule::FoodOverride;
        }
    }

    // Rule 5: healthcare support groups are community services.
    if original == Category::HealthcareServices.as_str() && service_type.contains("support group") {
        resolved = Some(Category::CommunityServices);
        rule = Rule::SupportGroupCarveOut;
    }

    // Rule 6: law-enforcement override.
    if (organization.contains("police") || organization.contains("sheriff"))
        && !original.to_lowercase().contains("law enforcement")
    {
        resolved = Some(Category::LawEnforcement);
        rule = Rule::LawEnforcementOverride;
    }

    // Rule 7: closed-set fallback. An unmapped original that already
    // spells a canonical name passes as identity.
    match resolved {
        Some(category) => Classification::new(category, rule),
        None => match Category::from_name(original) {
            Some(category) => Classification::new(category, Rule::Identity),
            None if is_crisis => {
                Classification::new(Category::CrisisServices, Rule::UnmappedFallback)
            }
            None => {
                warn!(
                    category = original,
                    organization = fields.organization,
                    "unmapped category, defaulting to Community Services"
                );
                Classification::new(Category::CommunityServices, Rule::UnmappedFallback)
            }
        },
    }
}
