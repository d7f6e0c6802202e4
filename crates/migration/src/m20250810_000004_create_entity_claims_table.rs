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
                    .as_enum(Alias::new("claim_role"))
                    .values(["owner", "founder", "admin", "manager", "team_member"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("claim_status"))
                    .values(["pending", "approved", "rejected"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EntityClaims::Table)
                    .if_not_exists()
                    .col(text(EntityClaims::Id).not_null().primary_key())
                    .col(text(EntityClaims::UserId).not_null())
                    .col(text_null(EntityClaims::EntityId))
                    .col(boolean(EntityClaims::IsNewEntity).not_null().default(true))
                    .col(ColumnDef::new(EntityClaims::NewEntityData).json_binary().null())
                    .col(
                        ColumnDef::new(EntityClaims::ClaimRole)
                            .custom(Alias::new("claim_role"))
                            .not_null()
                            .default(Expr::cust("'team_member'")),
                    )
                    .col(string(EntityClaims::WorkEmail).null())
                    .col(string(EntityClaims::LinkedinProfile).null())
                    .col(
                        ColumnDef::new(EntityClaims::VerificationDocuments)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(text_null(EntityClaims::AdditionalNotes))
                    .col(
                        ColumnDef::new(EntityClaims::Status)
                            .custom(Alias::new("claim_status"))
                            .not_null()
                            .default(Expr::cust("'pending'")),
                    )
                    .col(string(EntityClaims::RejectionReason).null())
                    .col(timestamp(EntityClaims::ReviewedAt).null())
                    .col(text_null(EntityClaims::ReviewedBy))
                    .col(
                        timestamp(EntityClaims::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(EntityClaims::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_claims_user_id")
                            .from(EntityClaims::Table, EntityClaims::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_claims_entity_id")
                            .from(EntityClaims::Table, EntityClaims::EntityId)
                            .to(Entities::Table, Entities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_entity_claims_status")
                    .table(EntityClaims::Table)
                    .col(EntityClaims::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_entity_claims_user_id")
                    .table(EntityClaims::Table)
                    .col(EntityClaims::UserId)
                    .to_owned(),
            )
            .await?;

        // One live claim per (user, entity): partial unique index restricted
        // to pending and approved rows, so a rejected claim never blocks a
        // fresh submission. The handler also pre-checks for a friendlier
        // error, but this index is the invariant's authority under races.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uq_entity_claims_live \
                 ON entity_claims (user_id, entity_id) \
                 WHERE status IN ('pending', 'approved') AND entity_id IS NOT NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntityClaims::Table).to_owned())
            .await?;

        for name in ["claim_role", "claim_status"] {
            manager
                .drop_type(Type::drop().name(Alias::new(name)).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EntityClaims {
    Table,
    Id,
    UserId,
    EntityId,
    IsNewEntity,
    NewEntityData,
    ClaimRole,
    WorkEmail,
    LinkedinProfile,
    VerificationDocuments,
    AdditionalNotes,
    Status,
    RejectionReason,
    ReviewedAt,
    ReviewedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Entities {
    Table,
    Id,
}
