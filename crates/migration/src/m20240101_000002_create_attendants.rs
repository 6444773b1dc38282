//! Create `attendants` table.
//!
//! Email and mobile are nullable; their uniqueness is enforced by the
//! indexes added in the follow-up index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendants::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendants::Id))
                    .col(string_len(Attendants::Name, 255).not_null())
                    .col(ColumnDef::new(Attendants::Address).string_len(255).null())
                    .col(ColumnDef::new(Attendants::Mobile).string_len(20).null())
                    .col(ColumnDef::new(Attendants::Email).string_len(100).null())
                    .col(ColumnDef::new(Attendants::Comments).string_len(500).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Attendants {
    Table,
    Id,
    Name,
    Address,
    Mobile,
    Email,
    Comments,
}
