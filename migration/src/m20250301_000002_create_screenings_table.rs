use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screenings::Table)
                    .if_not_exists()
                    .col(pk_auto(Screenings::Id))
                    .col(string(Screenings::Date))
                    .col(integer(Screenings::AvailableSeats))
                    .col(integer(Screenings::MovieId))
                    .col(big_integer(Screenings::CreatedAt))
                    .col(big_integer(Screenings::UpdatedAt))
                    .col(big_integer_null(Screenings::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_screenings_movie_id")
                            .from(Screenings::Table, Screenings::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_screenings_movie_id")
                    .table(Screenings::Table)
                    .col(Screenings::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_screenings_deleted_at")
                    .table(Screenings::Table)
                    .col(Screenings::DeletedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Screenings::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Screenings {
    Table,
    Id,
    Date,
    AvailableSeats,
    MovieId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}
