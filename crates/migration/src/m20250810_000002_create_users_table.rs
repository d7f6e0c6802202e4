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
                    .as_enum(Alias::new("user_status"))
                    .values(["active", "pending_review", "rejected", "suspended"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("user_type"))
                    .values(["browser", "entity_representative", "individual_public"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("public_role"))
                    .values([
                        "none",
                        "mentor",
                        "coach",
                        "freelancer",
                        "project_holder",
                        "investor",
                        "other",
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("auth_provider"))
                    .values(["email", "google", "linkedin"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(text(Users::Id).not_null().primary_key())
                    .col(string(Users::Email).not_null().unique_key())
                    .col(string(Users::PasswordHash).null())
                    .col(string(Users::FirstName).null())
                    .col(string(Users::LastName).null())
                    .col(string(Users::Phone).null())
                    .col(string(Users::ProfilePicture).null())
                    .col(
                        ColumnDef::new(Users::AuthProvider)
                            .custom(Alias::new("auth_provider"))
                            .not_null()
                            .default(Expr::cust("'email'")),
                    )
                    .col(string(Users::GoogleId).null().unique_key())
                    .col(string(Users::LinkedinId).null().unique_key())
                    .col(
                        ColumnDef::new(Users::UserType)
                            .custom(Alias::new("user_type"))
                            .not_null()
                            .default(Expr::cust("'browser'")),
                    )
                    .col(
                        ColumnDef::new(Users::PublicRole)
                            .custom(Alias::new("public_role"))
                            .not_null()
                            .default(Expr::cust("'none'")),
                    )
                    .col(
                        ColumnDef::new(Users::Status)
                            .custom(Alias::new("user_status"))
                            .not_null()
                            .default(Expr::cust("'active'")),
                    )
                    .col(string(Users::StatusReason).null())
                    .col(string(Users::EmailVerificationToken).null())
                    .col(timestamp(Users::EmailVerificationExpiresAt).null())
                    .col(string(Users::PasswordResetToken).null())
                    .col(timestamp(Users::PasswordResetExpiresAt).null())
                    .col(timestamp(Users::ApprovedAt).null())
                    .col(text(Users::ApprovedBy).null())
                    .col(timestamp(Users::LastLoginAt).null())
                    .col(
                        timestamp(Users::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Users::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin listings filter on these.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_status")
                    .table(Users::Table)
                    .col(Users::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_user_type")
                    .table(Users::Table)
                    .col(Users::UserType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        for name in ["user_status", "user_type", "public_role", "auth_provider"] {
            manager
                .drop_type(Type::drop().name(Alias::new(name)).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Phone,
    ProfilePicture,
    AuthProvider,
    GoogleId,
    LinkedinId,
    UserType,
    PublicRole,
    Status,
    StatusReason,
    EmailVerificationToken,
    EmailVerificationExpiresAt,
    PasswordResetToken,
    PasswordResetExpiresAt,
    ApprovedAt,
    ApprovedBy,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
