use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entities::Table)
                    .if_not_exists()
                    .col(text(Entities::Id).not_null().primary_key())
                    .col(string(Entities::Name).not_null())
                    .col(
                        string(Entities::EntityType)
                            .not_null()
                            .default(Expr::cust("'Startup'")),
                    )
                    .col(string(Entities::Icon).null())
                    .col(string(Entities::Logo).null())
                    .col(string(Entities::Color).null())
                    .col(text_null(Entities::Description))
                    .col(string(Entities::ShortDescription).null())
                    .col(string(Entities::Website).null())
                    .col(string(Entities::Location).null())
                    .col(string(Entities::Address).null())
                    .col(string(Entities::Wilaya).null())
                    .col(string(Entities::Email).null())
                    .col(string(Entities::Phone).null())
                    .col(string(Entities::Linkedin).null())
                    .col(string(Entities::Twitter).null())
                    .col(string(Entities::Facebook).null())
                    .col(string(Entities::Instagram).null())
                    .col(integer_null(Entities::FoundedYear))
                    .col(string(Entities::TeamSize).null())
                    .col(string(Entities::Sector).null())
                    .col(string(Entities::Stage).null())
                    .col(
                        ColumnDef::new(Entities::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(boolean(Entities::IsActive).not_null().default(true))
                    .col(boolean(Entities::IsFeatured).not_null().default(false))
                    .col(boolean(Entities::IsVerified).not_null().default(false))
                    .col(
                        timestamp(Entities::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Entities::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listings filter by type and activity.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_entities_entity_type")
                    .table(Entities::Table)
                    .col(Entities::EntityType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_entities_is_active")
                    .table(Entities::Table)
                    .col(Entities::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entities {
    Table,
    Id,
    Name,
    EntityType,
    Icon,
    Logo,
    Color,
    Description,
    ShortDescription,
    Website,
    Location,
    Address,
    Wilaya,
    Email,
    Phone,
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
    FoundedYear,
    TeamSize,
    Sector,
    Stage,
    Tags,
    IsActive,
    IsFeatured,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}
