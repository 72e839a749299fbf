//! Catalog invariants and the start-up consistency check.

use pretty_assertions::assert_eq;
use promptsheet::app::catalog::{
    self, categories, derive_categories, principles, verify_catalog, Category, CategoryFilter,
    CategoryKey, Principle,
};

fn sample(id: u32, category: CategoryKey) -> Principle {
    Principle {
        id,
        category,
        title: "Sample",
        description: "Sample description",
        example: "Sample example",
    }
}

#[test]
fn test_principles_are_ordered_by_id() {
    let ids: Vec<u32> = principles().iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=26).collect::<Vec<_>>());
}

#[test]
fn test_each_category_count_matches_its_principles() {
    for category in categories() {
        if let CategoryFilter::Only(key) = category.key {
            let tagged = principles().iter().filter(|p| p.category == key).count();
            assert_eq!(category.count, tagged, "count for {}", key);
        }
    }
}

#[test]
fn test_all_category_counts_every_principle() {
    let all = catalog::category(CategoryFilter::All);
    assert_eq!(all.count, principles().len());

    // No principle can carry the synthetic "all" key.
    let tagged_all = principles()
        .iter()
        .filter(|p| CategoryFilter::Only(p.category) == CategoryFilter::All)
        .count();
    assert_eq!(tagged_all, 0);

    let named_total: usize = categories()
        .iter()
        .filter(|c| c.key != CategoryFilter::All)
        .map(|c| c.count)
        .sum();
    assert_eq!(named_total, principles().len());
}

#[test]
fn test_category_display_order_and_names() {
    let tabs: Vec<(&str, &str, &str)> = categories()
        .iter()
        .map(|c| (c.key.as_str(), c.name, c.color_tag))
        .collect();
    assert_eq!(
        tabs,
        vec![
            ("all", "All Principles", "gray"),
            ("structure", "Structure & Formatting", "blue"),
            ("clarity", "Clarity & Communication", "green"),
            ("engagement", "Engagement & Interaction", "purple"),
            ("execution", "Task Execution", "orange"),
            ("motivation", "Quality Control", "red"),
        ]
    );
}

#[test]
fn test_principle_six_content() {
    let principle = catalog::principle(6).unwrap();
    assert_eq!(principle.title, "Direct Communication");
    assert_eq!(principle.category, CategoryKey::Clarity);
    assert_eq!(
        principle.example,
        "\"Generate a list\" instead of \"Please generate a list\""
    );
}

#[test]
fn test_multiline_examples_keep_line_breaks() {
    let principle = catalog::principle(1).unwrap();
    assert_eq!(principle.example.lines().count(), 4);
}

#[test]
fn test_quick_tips_cover_every_category_plus_reminder() {
    let labels: Vec<&str> = catalog::quick_tips().iter().map(|t| t.label).collect();
    assert_eq!(
        labels,
        vec!["Structure", "Clarity", "Engagement", "Execution", "Quality", "Remember"]
    );
}

#[test]
fn test_verify_accepts_derived_tables() {
    let principles = vec![
        sample(1, CategoryKey::Structure),
        sample(2, CategoryKey::Motivation),
        sample(3, CategoryKey::Motivation),
    ];
    let categories = derive_categories(&principles);
    assert!(verify_catalog(&principles, &categories).is_ok());
}

#[test]
fn test_verify_rejects_wrong_count() {
    let principles = vec![sample(1, CategoryKey::Clarity), sample(2, CategoryKey::Clarity)];
    let mut categories = derive_categories(&principles);
    for category in categories.iter_mut() {
        if category.key == CategoryFilter::Only(CategoryKey::Clarity) {
            category.count = 3;
        }
    }

    let err = verify_catalog(&principles, &categories).unwrap_err();
    assert!(err.to_string().contains("clarity"), "{}", err);
}

#[test]
fn test_verify_rejects_wrong_all_count() {
    let principles = vec![sample(1, CategoryKey::Execution)];
    let mut categories = derive_categories(&principles);
    categories[0].count = 26;

    let err = verify_catalog(&principles, &categories).unwrap_err();
    assert!(err.to_string().contains("'all'"), "{}", err);
}

#[test]
fn test_verify_rejects_id_gap() {
    let principles = vec![sample(1, CategoryKey::Structure), sample(3, CategoryKey::Structure)];
    let categories = derive_categories(&principles);

    let err = verify_catalog(&principles, &categories).unwrap_err();
    assert!(err.to_string().contains("has id 3, expected 2"), "{}", err);
}

#[test]
fn test_verify_rejects_missing_category() {
    let principles = vec![sample(1, CategoryKey::Engagement)];
    let categories: Vec<Category> = derive_categories(&principles)
        .into_iter()
        .filter(|c| c.key != CategoryFilter::Only(CategoryKey::Engagement))
        .collect();

    assert!(verify_catalog(&principles, &categories).is_err());
}
