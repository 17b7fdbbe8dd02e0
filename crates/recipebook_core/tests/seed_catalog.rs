use recipebook_core::db::open_db_in_memory;
use recipebook_core::{
    CatalogSeeder, CategoryRepository, Difficulty, RecipeRecord, RecipeRepository, SeedError,
    SqliteCategoryRepository, SqliteRecipeRepository,
};
use rusqlite::Connection;

fn seeded_store() -> (Connection, Vec<i64>, u64) {
    let mut conn = open_db_in_memory().unwrap();
    let report = CatalogSeeder::new(&mut conn).run().unwrap();
    (conn, report.recipe_ids, report.total_recipes)
}

fn load(conn: &mut Connection, id: i64) -> RecipeRecord {
    let repo = SqliteRecipeRepository::new(conn);
    repo.get(id).unwrap().expect("seeded recipe should exist")
}

#[test]
fn seeding_persists_exactly_two_recipes() {
    let (mut conn, ids, total) = seeded_store();
    assert_eq!(ids.len(), 2);
    assert_eq!(total, 2);

    let repo = SqliteRecipeRepository::new(&mut conn);
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn guacamole_matches_literal_field_values() {
    let (mut conn, ids, _) = seeded_store();

    let guacamole = load(&mut conn, ids[0]);
    assert_eq!(guacamole.description, "Perfect Guacamole");
    assert_eq!(guacamole.prep_time, 10);
    assert_eq!(guacamole.cook_time, 0);
    assert_eq!(guacamole.servings, 4);
    assert_eq!(guacamole.difficulty, Difficulty::Easy);
    assert_eq!(guacamole.ingredients.len(), 10);
    assert!(guacamole
        .notes
        .as_ref()
        .expect("guacamole notes should be persisted")
        .recipe_notes
        .starts_with("Be careful handling chilis!"));
}

#[test]
fn tacos_match_literal_field_values() {
    let (mut conn, ids, _) = seeded_store();

    let tacos = load(&mut conn, ids[1]);
    assert_eq!(tacos.description, "Spicy Grilled Chicken Tacos");
    assert_eq!(tacos.prep_time, 20);
    assert_eq!(tacos.cook_time, 15);
    assert_eq!(tacos.servings, 6);
    assert_eq!(tacos.difficulty, Difficulty::Moderate);
    assert_eq!(tacos.ingredients.len(), 18);
}

#[test]
fn seeded_children_back_reference_their_recipe() {
    let (mut conn, ids, _) = seeded_store();

    for id in ids {
        let record = load(&mut conn, id);
        assert_eq!(record.notes.as_ref().unwrap().recipe_id, id);
        for ingredient in &record.ingredients {
            assert_eq!(ingredient.recipe_id, id);
        }
    }
}

#[test]
fn seeded_recipes_reference_american_and_mexican() {
    let (mut conn, ids, _) = seeded_store();

    let (american, mexican) = {
        let refs = SqliteCategoryRepository::new(&conn);
        (
            refs.find_by_description("American").unwrap().unwrap().id,
            refs.find_by_description("Mexican").unwrap().unwrap().id,
        )
    };

    for id in ids {
        let record = load(&mut conn, id);
        assert!(record.category_ids.contains(&american));
        assert!(record.category_ids.contains(&mexican));
        assert_eq!(record.category_ids.len(), 2);
    }
}

#[test]
fn missing_unit_aborts_before_any_save() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "DELETE FROM unit_of_measure WHERE description = 'Teaspoon';",
        [],
    )
    .unwrap();

    let err = CatalogSeeder::new(&mut conn).run().unwrap_err();
    assert!(matches!(err, SeedError::MissingUnit(ref d) if d == "Teaspoon"));

    let repo = SqliteRecipeRepository::new(&mut conn);
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn missing_category_aborts_before_any_save() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute("DELETE FROM category WHERE description = 'Mexican';", [])
        .unwrap();

    let err = CatalogSeeder::new(&mut conn).run().unwrap_err();
    assert!(matches!(err, SeedError::MissingCategory(ref d) if d == "Mexican"));

    let repo = SqliteRecipeRepository::new(&mut conn);
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn fresh_seeder_against_same_store_duplicates_rows() {
    // Documents the absence of an existence guard: a second trigger
    // re-inserts rather than detecting prior seed data.
    let mut conn = open_db_in_memory().unwrap();
    CatalogSeeder::new(&mut conn).run().unwrap();
    let second = CatalogSeeder::new(&mut conn).run().unwrap();

    assert_eq!(second.total_recipes, 4);
    let repo = SqliteRecipeRepository::new(&mut conn);
    assert_eq!(repo.count().unwrap(), 4);
}

#[test]
fn same_seeder_instance_refuses_second_run() {
    let mut conn = open_db_in_memory().unwrap();
    let mut seeder = CatalogSeeder::new(&mut conn);
    seeder.run().unwrap();

    let err = seeder.run().unwrap_err();
    assert!(matches!(err, SeedError::AlreadySeeded));
}

#[test]
fn reported_total_matches_store_count() {
    let (mut conn, _, total) = seeded_store();
    let repo = SqliteRecipeRepository::new(&mut conn);
    assert_eq!(total, repo.count().unwrap());
}
