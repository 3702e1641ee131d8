//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for Dispensa:
//!
//! - `users`: authentication
//! - `inventory_items`: items currently in the house
//! - `grocery_items`: items to purchase, with the recipes demanding them
//! - `recipes`: named ordered ingredient lists
//!
//! An item name must never appear in both `inventory_items` and
//! `grocery_items` for the same user; the engine enforces that inside one
//! transaction per operation, the schema only provides lookup indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Username,
    Password,
}

#[derive(Iden)]
enum InventoryItems {
    Table,
    Id,
    Item,
    Category,
    UserId,
}

#[derive(Iden)]
enum GroceryItems {
    Table,
    Id,
    Item,
    Category,
    RequiredFor,
    UserId,
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
    Name,
    Ingredients,
    UserId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Inventory items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryItems::Item).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Category).string().not_null())
                    .col(ColumnDef::new(InventoryItems::UserId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inventory_items-user_id")
                            .from(InventoryItems::Table, InventoryItems::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-inventory_items-user-item")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::UserId)
                    .col(InventoryItems::Item)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Grocery items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(GroceryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroceryItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GroceryItems::Item).string().not_null())
                    .col(ColumnDef::new(GroceryItems::Category).string().not_null())
                    .col(ColumnDef::new(GroceryItems::RequiredFor).string())
                    .col(ColumnDef::new(GroceryItems::UserId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grocery_items-user_id")
                            .from(GroceryItems::Table, GroceryItems::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-grocery_items-user-item")
                    .table(GroceryItems::Table)
                    .col(GroceryItems::UserId)
                    .col(GroceryItems::Item)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Recipes
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipes::Name).string().not_null())
                    .col(ColumnDef::new(Recipes::Ingredients).string().not_null())
                    .col(ColumnDef::new(Recipes::UserId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipes-user_id")
                            .from(Recipes::Table, Recipes::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-recipes-user-name")
                    .table(Recipes::Table)
                    .col(Recipes::UserId)
                    .col(Recipes::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroceryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
