use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== PLANT STATE ==========
        manager
            .create_table(
                Table::create()
                    .table(PlantState::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlantState::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlantState::LastUpdated).timestamp_with_time_zone())
                    .col(ColumnDef::new(PlantState::LuminosityState).double().not_null())
                    .col(ColumnDef::new(PlantState::HumidityState).double().not_null())
                    .col(ColumnDef::new(PlantState::ValveState).boolean().not_null())
                    .col(ColumnDef::new(PlantState::LedIntensityState).integer().not_null())
                    .col(
                        ColumnDef::new(PlantState::Mode)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== PLANT EVENT ==========
        manager
            .create_table(
                Table::create()
                    .table(PlantEvent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlantEvent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlantEvent::LastUpdated).timestamp_with_time_zone())
                    .col(ColumnDef::new(PlantEvent::LuminosityEvent).double().not_null())
                    .col(ColumnDef::new(PlantEvent::HumidityEvent).double().not_null())
                    .col(ColumnDef::new(PlantEvent::ValveEvent).boolean().not_null())
                    .col(ColumnDef::new(PlantEvent::LedIntensityEvent).integer().not_null())
                    .col(
                        ColumnDef::new(PlantEvent::Mode)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== IOT DEVICE STATE / EVENT ==========
        manager
            .create_table(
                Table::create()
                    .table(IotDevState::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IotDevState::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IotDevState::LastUpdated).timestamp_with_time_zone())
                    .col(ColumnDef::new(IotDevState::PumpState).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IotDevEvent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IotDevEvent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IotDevEvent::LastUpdated).timestamp_with_time_zone())
                    .col(ColumnDef::new(IotDevEvent::PumpEvent).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // ========== IOT DEVICE ==========
        manager
            .create_table(
                Table::create()
                    .table(IotDev::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IotDev::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IotDev::OnlineStatus).boolean().not_null())
                    .col(ColumnDef::new(IotDev::DevStateId).integer().not_null())
                    .col(ColumnDef::new(IotDev::DevEventId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_iot_dev_state")
                            .from(IotDev::Table, IotDev::DevStateId)
                            .to(IotDevState::Table, IotDevState::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_iot_dev_event")
                            .from(IotDev::Table, IotDev::DevEventId)
                            .to(IotDevEvent::Table, IotDevEvent::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== PLANT ==========
        manager
            .create_table(
                Table::create()
                    .table(Plant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Plant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Plant::Error).boolean().not_null())
                    .col(ColumnDef::new(Plant::PlantStateId).integer().not_null())
                    .col(ColumnDef::new(Plant::PlantEventId).integer().not_null())
                    .col(ColumnDef::new(Plant::IotDevId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_state")
                            .from(Plant::Table, Plant::PlantStateId)
                            .to(PlantState::Table, PlantState::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_event")
                            .from(Plant::Table, Plant::PlantEventId)
                            .to(PlantEvent::Table, PlantEvent::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_iot_dev")
                            .from(Plant::Table, Plant::IotDevId)
                            .to(IotDev::Table, IotDev::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ========== LOG ==========
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Log::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Log::EntryCreationTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Log::EntryStoreTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Log::Temperature).double().not_null())
                    .col(ColumnDef::new(Log::LuminosityState).double().not_null())
                    .col(ColumnDef::new(Log::HumidityState).double().not_null())
                    .col(ColumnDef::new(Log::LuminosityEvent).double().not_null())
                    .col(ColumnDef::new(Log::HumidityEvent).double().not_null())
                    .col(ColumnDef::new(Log::PlantId).integer().not_null())
                    .col(ColumnDef::new(Log::ValveState).boolean().not_null())
                    .col(ColumnDef::new(Log::PumpState).boolean().not_null())
                    .col(ColumnDef::new(Log::LedIntensityState).integer().not_null())
                    .col(ColumnDef::new(Log::ValveEvent).boolean().not_null())
                    .col(ColumnDef::new(Log::PumpEvent).boolean().not_null())
                    .col(ColumnDef::new(Log::LedIntensityEvent).integer().not_null())
                    .col(
                        ColumnDef::new(Log::ModeEvent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Log::ModeState)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_plant")
                            .from(Log::Table, Log::PlantId)
                            .to(Plant::Table, Plant::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest-log lookup orders by id within a plant
        manager
            .create_index(
                Index::create()
                    .name("log_plant_id_idx")
                    .table(Log::Table)
                    .col(Log::PlantId)
                    .col(Log::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Log::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plant::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IotDev::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IotDevEvent::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IotDevState::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlantEvent::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlantState::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

// Table names keep the CamelCase of the deployed schema.

#[derive(DeriveIden)]
enum PlantState {
    #[sea_orm(iden = "PlantState")]
    Table,
    Id,
    LastUpdated,
    LuminosityState,
    HumidityState,
    ValveState,
    LedIntensityState,
    Mode,
}

#[derive(DeriveIden)]
enum PlantEvent {
    #[sea_orm(iden = "PlantEvent")]
    Table,
    Id,
    LastUpdated,
    LuminosityEvent,
    HumidityEvent,
    ValveEvent,
    LedIntensityEvent,
    Mode,
}

#[derive(DeriveIden)]
enum IotDevState {
    #[sea_orm(iden = "IotDevState")]
    Table,
    Id,
    LastUpdated,
    PumpState,
}

#[derive(DeriveIden)]
enum IotDevEvent {
    #[sea_orm(iden = "IotDevEvent")]
    Table,
    Id,
    LastUpdated,
    PumpEvent,
}

#[derive(DeriveIden)]
enum IotDev {
    #[sea_orm(iden = "IotDev")]
    Table,
    Id,
    OnlineStatus,
    DevStateId,
    DevEventId,
}

#[derive(DeriveIden)]
enum Plant {
    #[sea_orm(iden = "Plant")]
    Table,
    Id,
    Error,
    PlantStateId,
    PlantEventId,
    IotDevId,
}

#[derive(DeriveIden)]
enum Log {
    #[sea_orm(iden = "Log")]
    Table,
    Id,
    EntryCreationTime,
    EntryStoreTime,
    Temperature,
    LuminosityState,
    HumidityState,
    LuminosityEvent,
    HumidityEvent,
    PlantId,
    ValveState,
    PumpState,
    LedIntensityState,
    ValveEvent,
    PumpEvent,
    LedIntensityEvent,
    ModeEvent,
    ModeState,
}
