use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, GroceryItem};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password) VALUES (?, ?)",
        vec!["alice".into(), "password".into()],
    ))
    .await
    .unwrap();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password) VALUES (?, ?)",
        vec!["bob".into(), "password".into()],
    ))
    .await
    .unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn grocery_entry<'a>(list: &'a [GroceryItem], item: &str) -> &'a GroceryItem {
    list.iter()
        .find(|record| record.item == item)
        .unwrap_or_else(|| panic!("{item} not on grocery list"))
}

#[tokio::test]
async fn add_and_group_inventory() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("banana", "Fruit", "alice").await.unwrap();
    engine.add_item("Apple", "Fruit", "alice").await.unwrap();
    engine.add_item("milk", "Dairy", "alice").await.unwrap();

    let groups = engine.inventory_by_category("alice").await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category, "Dairy");
    assert_eq!(groups[0].items, vec!["milk"]);
    assert_eq!(groups[1].category, "Fruit");
    assert_eq!(groups[1].items, vec!["Apple", "banana"]);
}

#[tokio::test]
async fn add_item_twice_is_noop() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("milk", "Dairy", "alice").await.unwrap();
    engine.add_item("milk", "Dairy", "alice").await.unwrap();

    let groups = engine.inventory_by_category("alice").await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].items, vec!["milk"]);
}

#[tokio::test]
async fn grocery_blocks_inventory_add() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("milk", "Dairy", "alice").await.unwrap();
    engine.move_to_grocery("milk", "Dairy", "alice").await.unwrap();

    let err = engine.add_item("milk", "Dairy", "alice").await.unwrap_err();
    assert_eq!(err, EngineError::ItemInGrocery("milk".to_string()));

    // The rejection left no trace in the inventory.
    assert!(engine.inventory_by_category("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn move_to_grocery_upholds_mutual_exclusion() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("milk", "Dairy", "alice").await.unwrap();
    engine.move_to_grocery("milk", "Dairy", "alice").await.unwrap();

    assert!(engine.inventory_by_category("alice").await.unwrap().is_empty());
    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].item, "milk");
    assert_eq!(list[0].category, "Dairy");
    assert!(list[0].required_for.is_empty());
}

#[tokio::test]
async fn move_to_grocery_twice_is_idempotent() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();

    // The item is already on the list with recipe demand attached; a manual
    // move must not duplicate the record or clear the demand.
    engine.move_to_grocery("milk", "Dairy", "alice").await.unwrap();
    engine.move_to_grocery("milk", "Dairy", "alice").await.unwrap();

    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].required_for, vec!["Omelette"]);
    // The existing record kept its original category.
    assert_eq!(list[0].category, "Other");
}

#[tokio::test]
async fn delete_item_is_silent_on_absent() {
    let (engine, _db) = engine_with_db().await;

    engine.delete_item("ghost", "Other", "alice").await.unwrap();
    engine.move_to_inventory("ghost", "alice").await.unwrap();

    assert!(engine.inventory_by_category("alice").await.unwrap().is_empty());
    assert!(engine.grocery_list("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_ingredients_computation() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("eggs", "Dairy", "alice").await.unwrap();
    engine
        .add_recipe(
            "Omelette",
            &["eggs".to_string(), "milk".to_string(), "salt".to_string()],
            "alice",
        )
        .await
        .unwrap();

    let missing = engine.list_missing("alice").await.unwrap();
    assert_eq!(
        missing,
        vec![("Omelette".to_string(), vec!["milk".to_string(), "salt".to_string()])]
    );
}

#[tokio::test]
async fn recipe_ingredients_trimmed_of_blanks() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_recipe(
            "Omelette",
            &[" eggs ".to_string(), "".to_string(), "milk".to_string()],
            "alice",
        )
        .await
        .unwrap();

    let statuses = engine.recipes_with_missing("alice").await.unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].ingredients, vec!["eggs", "milk"]);
}

#[tokio::test]
async fn blank_recipe_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.add_recipe("   ", &[], "alice").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidName("recipe name must not be empty".to_string())
    );
}

#[tokio::test]
async fn duplicate_recipe_names_coexist() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Omelette", &["eggs".to_string()], "alice").await.unwrap();
    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();

    assert_eq!(engine.recipes_with_missing("alice").await.unwrap().len(), 2);

    // delete-recipe removes every record with that name.
    engine.delete_recipe("Omelette", "alice").await.unwrap();
    assert!(engine.recipes_with_missing("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn prepare_recipe_creates_demand() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("eggs", "Dairy", "alice").await.unwrap();
    engine
        .add_recipe(
            "Omelette",
            &["eggs".to_string(), "milk".to_string(), "salt".to_string()],
            "alice",
        )
        .await
        .unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();

    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list.len(), 2);
    let milk = grocery_entry(&list, "milk");
    assert_eq!(milk.category, "Other");
    assert_eq!(milk.required_for, vec!["Omelette"]);
    let salt = grocery_entry(&list, "salt");
    assert_eq!(salt.required_for, vec!["Omelette"]);

    // Ingredients already in the inventory were untouched.
    assert!(list.iter().all(|record| record.item != "eggs"));
}

#[tokio::test]
async fn prepare_merges_into_existing_grocery_item() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("milk", "Dairy", "alice").await.unwrap();
    engine.move_to_grocery("milk", "Dairy", "alice").await.unwrap();
    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();

    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list.len(), 1);
    // Manual entry keeps its category, gains the recipe demand.
    assert_eq!(list[0].category, "Dairy");
    assert_eq!(list[0].required_for, vec!["Omelette"]);
}

#[tokio::test]
async fn merge_is_deterministic_regardless_of_order() {
    let (engine, _db) = engine_with_db().await;

    for user in ["alice", "bob"] {
        engine.add_recipe("Pancakes", &["milk".to_string()], user).await.unwrap();
        engine.add_recipe("Carbonara", &["milk".to_string()], user).await.unwrap();
    }

    engine.prepare_recipe("Pancakes", "alice").await.unwrap();
    engine.prepare_recipe("Carbonara", "alice").await.unwrap();

    engine.prepare_recipe("Carbonara", "bob").await.unwrap();
    engine.prepare_recipe("Pancakes", "bob").await.unwrap();

    for user in ["alice", "bob"] {
        let list = engine.grocery_list(user).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].required_for, vec!["Carbonara", "Pancakes"]);
    }
}

#[tokio::test]
async fn prepare_unprepare_is_reversible() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();
    engine.unprepare_recipe("Omelette", "alice").await.unwrap();

    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].item, "milk");
    assert!(list[0].required_for.is_empty());
}

#[tokio::test]
async fn unprepare_keeps_other_recipes() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Pancakes", &["milk".to_string()], "alice").await.unwrap();
    engine.add_recipe("Carbonara", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Pancakes", "alice").await.unwrap();
    engine.prepare_recipe("Carbonara", "alice").await.unwrap();

    engine.unprepare_recipe("Carbonara", "alice").await.unwrap();

    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list[0].required_for, vec!["Pancakes"]);
}

#[tokio::test]
async fn prepare_missing_recipe_is_noop() {
    let (engine, _db) = engine_with_db().await;

    engine.prepare_recipe("Ghost", "alice").await.unwrap();
    engine.unprepare_recipe("Ghost", "alice").await.unwrap();

    assert!(engine.grocery_list("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn restock_clears_demand_context() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();

    engine.move_to_inventory("milk", "alice").await.unwrap();

    assert!(engine.grocery_list("alice").await.unwrap().is_empty());
    let groups = engine.inventory_by_category("alice").await.unwrap();
    assert_eq!(groups.len(), 1);
    // The inventory record takes over the grocery record's category.
    assert_eq!(groups[0].category, "Other");
    assert_eq!(groups[0].items, vec!["milk"]);
}

#[tokio::test]
async fn delete_recipe_leaves_required_for_references() {
    let (engine, _db) = engine_with_db().await;

    engine.add_recipe("Omelette", &["milk".to_string()], "alice").await.unwrap();
    engine.prepare_recipe("Omelette", "alice").await.unwrap();
    engine.delete_recipe("Omelette", "alice").await.unwrap();

    // Deleting the recipe does not cascade into grocery demand.
    let list = engine.grocery_list("alice").await.unwrap();
    assert_eq!(list[0].required_for, vec!["Omelette"]);
}

#[tokio::test]
async fn grocery_list_sorted_case_insensitively() {
    let (engine, _db) = engine_with_db().await;

    for (item, category) in [("salt", "Other"), ("Milk", "dairy"), ("butter", "Dairy")] {
        engine.add_item(item, category, "alice").await.unwrap();
        engine.move_to_grocery(item, category, "alice").await.unwrap();
    }

    let list = engine.grocery_list("alice").await.unwrap();
    let names: Vec<&str> = list.iter().map(|record| record.item.as_str()).collect();
    assert_eq!(names, vec!["butter", "Milk", "salt"]);
}

#[tokio::test]
async fn users_are_isolated() {
    let (engine, _db) = engine_with_db().await;

    engine.add_item("milk", "Dairy", "alice").await.unwrap();
    engine.add_recipe("Omelette", &["milk".to_string()], "bob").await.unwrap();
    engine.prepare_recipe("Omelette", "bob").await.unwrap();

    // Bob's preparation sees Bob's empty inventory, not Alice's milk.
    let bob_list = engine.grocery_list("bob").await.unwrap();
    assert_eq!(bob_list.len(), 1);
    assert_eq!(bob_list[0].item, "milk");

    // And Alice's collections are untouched.
    assert!(engine.grocery_list("alice").await.unwrap().is_empty());
    let groups = engine.inventory_by_category("alice").await.unwrap();
    assert_eq!(groups[0].items, vec!["milk"]);
}
