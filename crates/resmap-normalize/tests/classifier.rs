//! Scenario tests for the classification rule chain.

use resmap_model::{Category, RecordFields};
use resmap_normalize::{Rule, classify};

fn fields<'a>(
    category: &'a str,
    organization: &'a str,
    service_type: &'a str,
    services_offered: &'a str,
    crisis_service: &'a str,
) -> RecordFields<'a> {
    RecordFields {
        category,
        organization,
        service_type,
        services_offered,
        crisis_service,
    }
}

#[test]
fn crisis_flag_routes_mental_health_service_types() {
    let result = classify(&fields(
        "Healthcare Services",
        "Recovery Center",
        "Opioid Treatment",
        "medication assisted treatment",
        "yes",
    ));
    assert_eq!(result.category, Category::MentalHealthSubstanceUse);
    assert_eq!(result.rule, Rule::CrisisOverride);
}

#[test]
fn crisis_flag_defaults_to_crisis_services() {
    let result = classify(&fields(
        "Healthcare Services",
        "County Dental",
        "Dental Clinic",
        "emergency extractions",
        "yes",
    ));
    assert_eq!(result.category, Category::CrisisServices);
    assert_eq!(result.rule, Rule::CrisisOverride);
}

#[test]
fn crisis_override_short_circuits_later_rules() {
    // Food keywords and a sheriff in the name would both fire, but the
    // crisis override runs first and alone.
    let result = classify(&fields(
        "Government Services",
        "Sheriff's Community Kitchen",
        "outreach",
        "hot meals and food boxes",
        "yes",
    ));
    assert_eq!(result.category, Category::CrisisServices);
    assert_eq!(result.rule, Rule::CrisisOverride);
}

#[test]
fn crisis_flag_is_case_insensitive_but_untrimmed() {
    let shouting = classify(&fields("Education", "School", "tutoring", "", "YES"));
    assert_eq!(shouting.category, Category::CrisisServices);
    let padded = classify(&fields("Education", "School", "tutoring", "", " yes"));
    assert_eq!(padded.category, Category::Education);
}

#[test]
fn records_already_in_crisis_services_skip_the_override() {
    let result = classify(&fields(
        "Crisis Services",
        "Hotline",
        "crisis intervention",
        "24/7 call line",
        "yes",
    ));
    assert_eq!(result.category, Category::CrisisServices);
    assert_eq!(result.rule, Rule::Identity);
}

#[test]
fn migration_map_applies() {
    let result = classify(&fields("Mental Health", "Open Door Clinic", "counseling", "", "no"));
    assert_eq!(result.category, Category::MentalHealthSubstanceUse);
    assert_eq!(result.rule, Rule::Migration);
}

#[test]
fn migration_identity_keeps_self_mapped_categories() {
    let result = classify(&fields("Legal Services", "Legal Aid of NC", "civil legal aid", "", "no"));
    assert_eq!(result.category, Category::LegalServices);
    assert_eq!(result.rule, Rule::Migration);
}

#[test]
fn tribal_keywords_split_government_records() {
    let result = classify(&fields(
        "Government/Tribal Services",
        "Lumbee Tribal Housing",
        "housing assistance",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::TribalServices);
    assert_eq!(result.rule, Rule::TribalSplit);
}

#[test]
fn government_records_without_tribal_keywords_stay_government() {
    let result = classify(&fields(
        "Government/Tribal Services",
        "County Clerk Office",
        "records",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::GovernmentServices);
    assert_eq!(result.rule, Rule::TribalSplit);
}

#[test]
fn tribal_split_also_covers_migrated_government_services() {
    let result = classify(&fields(
        "Government & Tribal Services",
        "Tribe Enrollment Office",
        "enrollment",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::TribalServices);
}

#[test]
fn food_override_beats_migration() {
    let result = classify(&fields(
        "Healthcare Services",
        "Wellness Center",
        "general support",
        "provides food pantry and nutrition counseling",
        "no",
    ));
    assert_eq!(result.category, Category::FoodServices);
    assert_eq!(result.rule, Rule::FoodOverride);
}

#[test]
fn support_group_service_type_exempts_the_food_override() {
    let result = classify(&fields(
        "Healthcare Services",
        "Wellness Center",
        "support group",
        "provides food pantry and nutrition counseling",
        "no",
    ));
    // Falls through to the healthcare support-group carve-out instead.
    assert_eq!(result.category, Category::CommunityServices);
    assert_eq!(result.rule, Rule::SupportGroupCarveOut);
}

#[test]
fn twelve_step_groups_are_exempt_from_the_food_override() {
    let oa = classify(&fields(
        "Community Services",
        "Overeaters Anonymous",
        "peer support",
        "weekly meals and discussion",
        "no",
    ));
    assert_eq!(oa.category, Category::CommunityServices);
    let al_anon = classify(&fields(
        "Community Services",
        "Al-Anon Family Group",
        "peer support",
        "potluck meal meetings",
        "no",
    ));
    assert_eq!(al_anon.category, Category::CommunityServices);
}

#[test]
fn food_bank_organization_names_trigger_the_override() {
    let result = classify(&fields(
        "Community Organizations",
        "Second Harvest Food Bank",
        "distribution",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::FoodServices);
}

#[test]
fn food_override_outranks_the_tribal_split() {
    let result = classify(&fields(
        "Government/Tribal Services",
        "Lumbee Elder Services",
        "elder care",
        "home-delivered meal program",
        "no",
    ));
    assert_eq!(result.category, Category::FoodServices);
}

#[test]
fn law_enforcement_override_applies_to_police_and_sheriff() {
    let result = classify(&fields(
        "Government Services",
        "Robeson County Sheriff's Office",
        "public safety",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::LawEnforcement);
    assert_eq!(result.rule, Rule::LawEnforcementOverride);
}

#[test]
fn law_enforcement_override_skips_records_already_marked() {
    let result = classify(&fields(
        "Law Enforcement",
        "City Police Department",
        "public safety",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::LawEnforcement);
    assert_eq!(result.rule, Rule::Migration);
}

#[test]
fn law_enforcement_override_runs_after_the_food_override() {
    let result = classify(&fields(
        "Government Services",
        "Sheriff's Outreach Unit",
        "outreach",
        "food box delivery",
        "no",
    ));
    assert_eq!(result.category, Category::LawEnforcement);
}

#[test]
fn food_override_can_reclassify_legal_records() {
    // Rule order quirk kept on purpose: nothing reclaims this record
    // because the law-enforcement override keys on the organization name.
    let result = classify(&fields(
        "Legal Services",
        "Justice Center",
        "legal aid",
        "community kitchen on Fridays",
        "no",
    ));
    assert_eq!(result.category, Category::FoodServices);
}

#[test]
fn unmapped_categories_fall_back_to_community_services() {
    let result = classify(&fields(
        "Miscellaneous Outreach",
        "Helping Hands",
        "outreach",
        "",
        "no",
    ));
    assert_eq!(result.category, Category::CommunityServices);
    assert_eq!(result.rule, Rule::UnmappedFallback);
}

#[test]
fn unmapped_crisis_records_fall_back_to_crisis_services() {
    let result = classify(&fields("Crisis Services", "Safe Harbor", "", "", "yes"));
    assert_eq!(result.category, Category::CrisisServices);
    let unmapped = classify(&fields("Crisis Services ", "Safe Harbor", "", "", "yes"));
    // Trailing space: not "Crisis Services" exactly, so the crisis
    // override fires before the fallback is ever consulted.
    assert_eq!(unmapped.category, Category::CrisisServices);
    assert_eq!(unmapped.rule, Rule::CrisisOverride);
}

#[test]
fn canonical_originals_without_map_entries_pass_through() {
    for name in ["Tribal Services", "Food Services", "Faith-Based Services"] {
        let result = classify(&fields(name, "Org", "", "", "no"));
        assert_eq!(result.category.as_str(), name);
    }
}

#[test]
fn empty_record_defaults_to_community_services() {
    let result = classify(&fields("", "", "", "", ""));
    assert_eq!(result.category, Category::CommunityServices);
    assert_eq!(result.rule, Rule::UnmappedFallback);
}
