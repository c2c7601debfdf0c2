use std::collections::BTreeSet;

use mealmix_catalog::{Columns, MealCatalog, Selection};
use mealmix_shared::{Error, RawRow, Slot};
use temp_dir::TempDir;

fn scenario() -> MealCatalog {
    MealCatalog::build(vec![
        RawRow::new("oats", "soup", "rice"),
        RawRow::new("oats", "salad", "fish"),
        RawRow::new("eggs", "soup", "rice"),
    ])
    .unwrap()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_lunches_for_breakfast() {
    let catalog = scenario();

    let lunches = catalog
        .compatible_options(&Selection::breakfast("oats"), Slot::Lunch)
        .unwrap();

    assert_eq!(lunches, set(&["soup", "salad"]));
}

#[test]
fn test_dinners_for_breakfast_and_lunch() {
    let catalog = scenario();

    let dinners = catalog
        .compatible_options(
            &Selection::breakfast("oats").with(Slot::Lunch, "soup"),
            Slot::Dinner,
        )
        .unwrap();

    assert_eq!(dinners, set(&["rice"]));
}

#[test]
fn test_unknown_breakfast_is_empty_not_error() {
    let catalog = scenario();

    let lunches = catalog
        .compatible_options(&Selection::breakfast("toast"), Slot::Lunch)
        .unwrap();

    assert!(lunches.is_empty());
}

#[test]
fn test_compatible_lunches_match_rows_exactly() {
    let catalog = MealCatalog::build(
        (0..40).map(|i| RawRow::new(format!("b{}", i % 5), format!("l{}", i % 7), format!("d{i}"))),
    )
    .unwrap();

    for breakfast in catalog.distinct_values(Slot::Breakfast) {
        let expected = catalog
            .rows()
            .iter()
            .filter(|row| row.breakfast == breakfast)
            .map(|row| row.lunch.clone())
            .collect::<BTreeSet<_>>();

        let lunches = catalog
            .compatible_options(&Selection::breakfast(&breakfast), Slot::Lunch)
            .unwrap();

        assert_eq!(lunches, expected);
    }
}

#[test]
fn test_distinct_values_have_no_duplicates_and_are_sorted() {
    let catalog = MealCatalog::build(vec![
        RawRow::new("Zwieback", "b", "c"),
        RawRow::new("apfel", "b", "c"),
        RawRow::new("ZWIEBACK ", "a", "c"),
    ])
    .unwrap();

    for slot in Slot::all() {
        let values = catalog.distinct_values(*slot).into_iter().collect::<Vec<_>>();
        let mut sorted = values.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(values, sorted);
    }

    assert_eq!(
        catalog.distinct_values(Slot::Breakfast),
        set(&["apfel", "zwieback"])
    );
}

#[test]
fn test_load_missing_file_is_source_unavailable() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("missing.csv");

    let result = mealmix_catalog::load(&path, &Columns::default());

    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));

    Ok(())
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("meals.csv");
    std::fs::write(
        &path,
        "breakfast,lunch,dinner\nOats,Soup,Rice\n Eggs ,Salad, Fish \n",
    )?;

    let catalog = mealmix_catalog::load(&path, &Columns::default())?;

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.distinct_values(Slot::Breakfast), set(&["eggs", "oats"]));
    assert_eq!(catalog.distinct_values(Slot::Dinner), set(&["Fish", "Rice"]));

    Ok(())
}
