use recipebook_core::db::open_db_in_memory;
use recipebook_core::{
    CategoryRepository, SqliteCategoryRepository, SqliteUnitOfMeasureRepository,
    UnitOfMeasureRepository,
};

#[test]
fn find_unit_by_description_is_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let units = SqliteUnitOfMeasureRepository::new(&conn);

    let teaspoon = units.find_by_description("Teaspoon").unwrap().unwrap();
    assert_eq!(teaspoon.description, "Teaspoon");

    assert!(units.find_by_description("teaspoon").unwrap().is_none());
    assert!(units.find_by_description("Hogshead").unwrap().is_none());
}

#[test]
fn find_category_by_description_is_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);

    let mexican = categories.find_by_description("Mexican").unwrap().unwrap();
    assert_eq!(mexican.description, "Mexican");

    assert!(categories.find_by_description("Martian").unwrap().is_none());
}

#[test]
fn list_units_is_sorted_and_complete() {
    let conn = open_db_in_memory().unwrap();
    let units = SqliteUnitOfMeasureRepository::new(&conn);

    let all = units.list_units().unwrap();
    assert_eq!(all.len(), 8);
    let descriptions: Vec<&str> = all.iter().map(|u| u.description.as_str()).collect();
    let mut sorted = descriptions.clone();
    sorted.sort_unstable();
    assert_eq!(descriptions, sorted);
}

#[test]
fn list_categories_is_sorted_and_complete() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::new(&conn);

    let all = categories.list_categories().unwrap();
    assert_eq!(all.len(), 4);
    let descriptions: Vec<&str> = all.iter().map(|c| c.description.as_str()).collect();
    assert!(descriptions.contains(&"American"));
    assert!(descriptions.contains(&"Mexican"));
}
