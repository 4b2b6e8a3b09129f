use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Number).integer().not_null())
                    .col(ColumnDef::new(Questions::Type).string_len(2).not_null())
                    .col(ColumnDef::new(Questions::Content).text().not_null())
                    .col(
                        ColumnDef::new(Questions::IsQuiz)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Questions::SetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_set_id")
                            .from(Questions::Table, Questions::SetId)
                            .to(Sets::Table, Sets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A question number appears at most once per set
        manager
            .create_index(
                Index::create()
                    .name("uq_questions_set_number")
                    .table(Questions::Table)
                    .col(Questions::SetId)
                    .col(Questions::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    Number,
    Type,
    Content,
    IsQuiz,
    SetId,
}

#[derive(DeriveIden)]
enum Sets {
    Table,
    Id,
}
