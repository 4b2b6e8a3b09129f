use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One outstanding code per user: the user id is the key
        manager
            .create_table(
                Table::create()
                    .table(UserOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserOtps::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserOtps::OtpCode).string_len(6).not_null())
                    .col(
                        ColumnDef::new(UserOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_otps_user_id")
                            .from(UserOtps::Table, UserOtps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOtps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserOtps {
    Table,
    UserId,
    OtpCode,
    ExpiresAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
