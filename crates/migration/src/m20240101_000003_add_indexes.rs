//! Indexes for lookup paths plus the authoritative uniqueness guards.
//!
//! The service layer pre-checks attendant email/mobile duplicates for
//! friendly error messages, but concurrent creates can race; these unique
//! indexes are the guard that actually holds. NULLs are exempt, so
//! attendants without email or mobile never collide.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Products: category filter and low-stock report
        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_products_stock")
                    .table(Products::Table)
                    .col(Products::Stock)
                    .to_owned(),
            )
            .await?;

        // Attendants: unique email and mobile
        manager
            .create_index(
                Index::create()
                    .name("uniq_attendants_email")
                    .table(Attendants::Table)
                    .col(Attendants::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("uniq_attendants_mobile")
                    .table(Attendants::Table)
                    .col(Attendants::Mobile)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_attendants_mobile")
                    .table(Attendants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_attendants_email")
                    .table(Attendants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_stock")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Category,
    Stock,
}

#[derive(DeriveIden)]
enum Attendants {
    Table,
    Email,
    Mobile,
}
