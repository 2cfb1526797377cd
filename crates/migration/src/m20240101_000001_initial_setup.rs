use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Houses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Houses::HouseId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Houses::Street).string().not_null())
                    .col(ColumnDef::new(Houses::DoorNumber).string().not_null())
                    .col(ColumnDef::new(Houses::PostalCode).string().not_null())
                    .col(ColumnDef::new(Houses::CountryCode).string().not_null())
                    .col(ColumnDef::new(Houses::Latitude).double().not_null())
                    .col(ColumnDef::new(Houses::Longitude).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::RoomId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::HouseId).string().not_null())
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Width).double().not_null())
                    .col(ColumnDef::new(Rooms::Depth).double().not_null())
                    .col(ColumnDef::new(Rooms::Height).double().not_null())
                    .col(ColumnDef::new(Rooms::Floor).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Reference columns hold plain IDs: no foreign keys between aggregates
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::DeviceId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::RoomId).string().not_null())
                    .col(ColumnDef::new(Devices::Name).string().not_null())
                    .col(ColumnDef::new(Devices::Active).boolean().not_null())
                    .col(ColumnDef::new(Devices::DeviceTypeId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DeviceTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceTypes::DeviceTypeId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeviceTypes::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Units::UnitId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::Description).string().not_null())
                    .col(ColumnDef::new(Units::Symbol).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SensorTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorTypes::SensorTypeId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorTypes::Description).string().not_null())
                    .col(ColumnDef::new(SensorTypes::UnitId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActuatorTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActuatorTypes::ActuatorTypeId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActuatorTypes::Description).string().not_null())
                    .col(ColumnDef::new(ActuatorTypes::UnitId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SensorModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorModels::ModelPath)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorModels::Name).string().not_null())
                    .col(ColumnDef::new(SensorModels::SensorTypeId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActuatorModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActuatorModels::ModelPath)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActuatorModels::Name).string().not_null())
                    .col(ColumnDef::new(ActuatorModels::ActuatorTypeId).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Append-only readings
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::LogId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Logs::DeviceId).string().not_null())
                    .col(ColumnDef::new(Logs::SensorId).string().not_null())
                    .col(ColumnDef::new(Logs::Timestamp).date_time().not_null())
                    .col(ColumnDef::new(Logs::Reading).string().not_null())
                    .col(ColumnDef::new(Logs::SensorTypeId).string().not_null())
                    .col(ColumnDef::new(Logs::UnitId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_device_timestamp")
                    .table(Logs::Table)
                    .col(Logs::DeviceId)
                    .col(Logs::Timestamp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActuatorModels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorModels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActuatorTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DeviceTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Devices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Houses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Houses {
    Table,
    HouseId,
    Street,
    DoorNumber,
    PostalCode,
    CountryCode,
    Latitude,
    Longitude,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    RoomId,
    HouseId,
    Name,
    Width,
    Depth,
    Height,
    Floor,
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    DeviceId,
    RoomId,
    Name,
    Active,
    DeviceTypeId,
}

#[derive(DeriveIden)]
enum DeviceTypes {
    Table,
    DeviceTypeId,
    Description,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    UnitId,
    Description,
    Symbol,
}

#[derive(DeriveIden)]
enum SensorTypes {
    Table,
    SensorTypeId,
    Description,
    UnitId,
}

#[derive(DeriveIden)]
enum ActuatorTypes {
    Table,
    ActuatorTypeId,
    Description,
    UnitId,
}

#[derive(DeriveIden)]
enum SensorModels {
    Table,
    ModelPath,
    Name,
    SensorTypeId,
}

#[derive(DeriveIden)]
enum ActuatorModels {
    Table,
    ModelPath,
    Name,
    ActuatorTypeId,
}

#[derive(DeriveIden)]
enum Logs {
    Table,
    LogId,
    DeviceId,
    SensorId,
    Timestamp,
    Reading,
    SensorTypeId,
    UnitId,
}
