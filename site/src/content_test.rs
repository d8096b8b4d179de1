use std::collections::HashSet;

use super::*;

#[test]
fn nav_items_point_at_rendered_sections() {
    for item in NAV_ITEMS {
        assert!(SECTION_IDS.contains(&item.section), "{} has no section", item.label);
    }
}

#[test]
fn section_ids_are_unique() {
    let unique: HashSet<_> = SECTION_IDS.iter().collect();
    assert_eq!(unique.len(), SECTION_IDS.len());
}

#[test]
fn project_ids_are_unique_and_links_are_https() {
    let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PROJECTS.len());
    for project in PROJECTS {
        assert!(project.github.starts_with("https://"), "{}", project.title);
        assert!(project.demo.starts_with("https://"), "{}", project.title);
        assert!(!project.tech.is_empty(), "{}", project.title);
    }
}

#[test]
fn skill_categories_have_no_duplicate_skills() {
    for category in SKILL_CATEGORIES {
        let unique: HashSet<_> = category.skills.iter().collect();
        assert_eq!(unique.len(), category.skills.len(), "{}", category.name);
    }
}

#[test]
fn skill_glyph_has_fallback() {
    assert_eq!(skill_glyph("Java"), "☕");
    assert_eq!(skill_glyph("COBOL"), "</>");
}

#[test]
fn social_links_split_external_and_mail() {
    let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email");
    assert!(email.is_some_and(|l| !l.is_external()));
    assert!(SOCIAL_LINKS.iter().filter(|l| l.label != "Email").all(SocialLink::is_external));
}

#[test]
fn github_counters_follow_stats() {
    let counters = GITHUB_STATS.counters();
    assert_eq!(counters[0], ("Repositories", 21));
    assert_eq!(counters[3], ("Pull Requests", 74));
}

#[test]
fn about_paragraphs_are_not_empty() {
    assert_eq!(ABOUT_PARAGRAPHS.len(), 3);
    assert!(ABOUT_PARAGRAPHS.iter().all(|p| p.iter().any(|s| matches!(s, Span::Highlight(_)))));
}
