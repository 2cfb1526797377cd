//! Both relational backends over one database see each other's writes.

use domain::value_object::{DeviceTypeId, TypeDescription};
use domain::{AggregateRoot, DeviceTypeFactory, DeviceTypeFactoryImpl, DomainError};
use infrastructure::{Database, PersistenceConfig, Repositories, StorageBackend};

#[tokio::test]
async fn test_backends_share_rows() {
    let database = Database::in_memory().await.unwrap();
    let sqlx = Repositories::sqlx(&database);
    let sea_orm = Repositories::sea_orm(&database);

    let light = DeviceTypeFactoryImpl
        .create_device_type(TypeDescription::new("Light").unwrap());
    let id = light.id().clone();
    sqlx.device_types.save(light.clone()).await.unwrap();

    let read_back = sea_orm.device_types.of_identity(&id).await.unwrap().unwrap();
    assert_eq!(read_back.description().as_str(), "Light");

    let err = sea_orm.device_types.save(light).await.unwrap_err();
    assert!(matches!(err, DomainError::DuplicateIdentity { .. }));
}

#[tokio::test]
async fn test_from_config_builds_each_backend() {
    for backend in [
        StorageBackend::Memory,
        StorageBackend::Sqlx,
        StorageBackend::SeaOrm,
    ] {
        let config = PersistenceConfig {
            backend,
            ..PersistenceConfig::default()
        };
        let repos = Repositories::from_config(&config).await.unwrap();

        let id = DeviceTypeId::new("Heater").unwrap();
        let heater = DeviceTypeFactoryImpl
            .create_device_type_with_id(id.clone(), TypeDescription::new("Heater").unwrap());
        repos.device_types.save(heater).await.unwrap();
        assert!(repos.device_types.contains_of_identity(&id).await.unwrap());
    }
}

#[tokio::test]
async fn test_file_database_survives_reconnect() {
    let dir = std::env::temp_dir().join(format!("smarthome-{}", std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    let url = format!("sqlite://{}", dir.join("persistence.db").display());

    let id = DeviceTypeId::new("Fan").unwrap();
    {
        let database = Database::connect(&url, 2).await.unwrap();
        database.migrate().await.unwrap();
        let repos = Repositories::sqlx(&database);
        let fan = DeviceTypeFactoryImpl
            .create_device_type_with_id(id.clone(), TypeDescription::new("Fan").unwrap());
        repos.device_types.save(fan).await.unwrap();
        database.pool().close().await;
    }

    let database = Database::connect(&url, 2).await.unwrap();
    database.migrate().await.unwrap();
    let repos = Repositories::sea_orm(&database);
    assert!(repos.device_types.contains_of_identity(&id).await.unwrap());

    database.pool().close().await;
    std::fs::remove_dir_all(&dir).ok();
}
