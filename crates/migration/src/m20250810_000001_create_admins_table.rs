use sea_orm_migration::{prelude::*, schema::*, sea_query::extension::postgres::Type};
use sea_query::Alias;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("admin_role"))
                    .values(["admin", "superadmin"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(text(Admins::Id).not_null().primary_key())
                    .col(string(Admins::Username).not_null().unique_key())
                    .col(string(Admins::Email).not_null().unique_key())
                    .col(string(Admins::PasswordHash).not_null())
                    .col(
                        ColumnDef::new(Admins::Role)
                            .custom(Alias::new("admin_role"))
                            .not_null()
                            .default(Expr::cust("'admin'")),
                    )
                    .col(timestamp(Admins::LastLoginAt).null())
                    .col(
                        timestamp(Admins::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("admin_role")).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Admins {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    LastLoginAt,
    CreatedAt,
}
