use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(text(Announcements::Id).not_null().primary_key())
                    .col(string(Announcements::Title).not_null())
                    .col(text(Announcements::Content).not_null())
                    .col(string(Announcements::Excerpt).not_null())
                    .col(
                        string(Announcements::Category)
                            .not_null()
                            .default(Expr::cust("'news'")),
                    )
                    .col(
                        string(Announcements::Author)
                            .not_null()
                            .default(Expr::cust("'UP-NEXUS Team'")),
                    )
                    .col(string(Announcements::AuthorAvatar).null())
                    .col(string(Announcements::Image).null())
                    .col(
                        ColumnDef::new(Announcements::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(timestamp(Announcements::EventDate).null())
                    .col(string(Announcements::EventLocation).null())
                    .col(string(Announcements::Company).null())
                    .col(string(Announcements::JobType).null())
                    .col(timestamp(Announcements::Deadline).null())
                    .col(string(Announcements::FundingAmount).null())
                    .col(string(Announcements::ExternalLink).null())
                    .col(string(Announcements::ApplyLink).null())
                    .col(boolean(Announcements::IsPublished).not_null().default(true))
                    .col(boolean(Announcements::IsPinned).not_null().default(false))
                    .col(big_integer(Announcements::Views).not_null().default(0))
                    .col(
                        timestamp(Announcements::PublishedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Announcements::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Announcements::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order is pinned first, then newest published.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_pinned_published")
                    .table(Announcements::Table)
                    .col(Announcements::IsPinned)
                    .col(Announcements::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_category")
                    .table(Announcements::Table)
                    .col(Announcements::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcements {
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    Category,
    Author,
    AuthorAvatar,
    Image,
    Tags,
    EventDate,
    EventLocation,
    Company,
    JobType,
    Deadline,
    FundingAmount,
    ExternalLink,
    ApplyLink,
    IsPublished,
    IsPinned,
    Views,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
