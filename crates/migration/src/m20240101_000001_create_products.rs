//! Create `products` table.
//!
//! Price is NUMERIC(10,2); non-negativity is enforced in the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 255).not_null())
                    .col(decimal_len(Products::Price, 10, 2).not_null())
                    .col(string_len(Products::Category, 255).not_null())
                    .col(integer(Products::Stock).not_null())
                    // Explicitly define nullable description to avoid conflicting NULL/NOT NULL
                    .col(ColumnDef::new(Products::Description).string_len(500).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Category,
    Stock,
    Description,
}
