//! Every storage backend must give the same answers for the same calls.
//!
//! Each test runs against the in-memory maps, the sqlx repositories and
//! the sea-orm repositories, the relational ones on a private in-memory
//! SQLite database with the schema applied.

use chrono::{NaiveDate, NaiveDateTime};
use domain::value_object::*;
use domain::{
    ActuatorModel, ActuatorModelFactory, ActuatorModelFactoryImpl, ActuatorTypeFactory,
    ActuatorTypeFactoryImpl, AggregateRoot, Device, DeviceFactory, DeviceFactoryImpl,
    DeviceTypeFactory, DeviceTypeFactoryImpl, DomainError, House, HouseFactory, HouseFactoryImpl,
    Log, LogFactory, LogFactoryImpl, LogReading, PostalCodeFactory, Room, RoomFactory,
    RoomFactoryImpl, SensorModel, SensorModelFactory, SensorModelFactoryImpl, SensorTypeFactory,
    SensorTypeFactoryImpl, Unit, UnitFactory, UnitFactoryImpl,
};
use infrastructure::{Database, Repositories};

async fn backends() -> Vec<(&'static str, Repositories)> {
    backends_with(PostalCodeFactory::default()).await
}

async fn backends_with(postal_codes: PostalCodeFactory) -> Vec<(&'static str, Repositories)> {
    let sqlx_db = Database::in_memory().await.unwrap();
    let sea_orm_db = Database::in_memory().await.unwrap();
    vec![
        ("memory", Repositories::in_memory()),
        (
            "sqlx",
            Repositories::sqlx_with_postal_codes(&sqlx_db, postal_codes.clone()),
        ),
        (
            "sea_orm",
            Repositories::sea_orm_with_postal_codes(&sea_orm_db, postal_codes),
        ),
    ]
}

fn france(raw: &str) -> Result<String, String> {
    if raw.len() == 5 && raw.chars().all(|c| c.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err("expected five digits".to_string())
    }
}

fn house(id: &str, street: &str) -> House {
    let address =
        Address::from_raw(street, "12", "4200-465", "PT", &PostalCodeFactory::default()).unwrap();
    HouseFactoryImpl.create_house_with_id(
        HouseId::new(id).unwrap(),
        address,
        Gps::new(41.17, -8.6).unwrap(),
    )
}

fn living_room() -> Room {
    RoomFactoryImpl.create_room(
        HouseId::new("H1").unwrap(),
        RoomName::new("Living Room").unwrap(),
        Dimension::new(10.0, 10.0, 10.0).unwrap(),
        RoomFloor::new(1),
    )
}

fn device(id: &str, room: &str) -> Device {
    DeviceFactoryImpl.create_device_with_id(
        DeviceId::new(id).unwrap(),
        RoomId::new(room).unwrap(),
        DeviceName::new("Ceiling Lamp").unwrap(),
        DeviceStatus::ACTIVE,
        DeviceTypeId::new("Light").unwrap(),
    )
}

fn sensor_model(path: &str, sensor_type: &str) -> SensorModel {
    SensorModelFactoryImpl.create_sensor_model(
        SensorModelName::new("GA100K").unwrap(),
        ModelPath::new(path).unwrap(),
        SensorTypeId::new(sensor_type).unwrap(),
    )
}

fn actuator_model(path: &str, actuator_type: &str) -> ActuatorModel {
    ActuatorModelFactoryImpl.create_actuator_model(
        ActuatorModelName::new("BlindRoller").unwrap(),
        ModelPath::new(path).unwrap(),
        ActuatorTypeId::new(actuator_type).unwrap(),
    )
}

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn log(id: &str, device: &str, hour: u32) -> Log {
    LogFactoryImpl.create_log_with_id(
        LogId::new(id).unwrap(),
        LogReading {
            device_id: DeviceId::new(device).unwrap(),
            sensor_id: SensorId::new("S1").unwrap(),
            timestamp: at(hour),
            value: ReadingValue::new("21.5").unwrap(),
            sensor_type_id: SensorTypeId::new("Temperature").unwrap(),
            unit_id: UnitId::new("U1").unwrap(),
        },
    )
}

fn ids<A: AggregateRoot>(aggregates: &[A]) -> Vec<String> {
    aggregates.iter().map(|a| a.id().to_string()).collect()
}

#[tokio::test]
async fn test_empty_repository() {
    for (backend, repos) in backends().await {
        assert!(repos.houses.find_all().await.unwrap().is_empty(), "{backend}");
        assert!(repos.logs.find_all().await.unwrap().is_empty(), "{backend}");
        let missing = HouseId::new("H404").unwrap();
        assert_eq!(repos.houses.of_identity(&missing).await.unwrap(), None, "{backend}");
        assert!(!repos.houses.contains_of_identity(&missing).await.unwrap(), "{backend}");
    }
}

#[tokio::test]
async fn test_room_round_trip() {
    for (backend, repos) in backends().await {
        let room = living_room();
        let id = room.id().clone();
        repos.rooms.save(room).await.unwrap();

        let stored = repos.rooms.of_identity(&id).await.unwrap().unwrap();
        assert_eq!(stored.id(), &id, "{backend}");
        assert_eq!(stored.house_id().as_str(), "H1", "{backend}");
        assert_eq!(stored.name().as_str(), "Living Room", "{backend}");
        assert_eq!(stored.dimension().width(), 10.0, "{backend}");
        assert_eq!(stored.dimension().depth(), 10.0, "{backend}");
        assert_eq!(stored.dimension().height(), 10.0, "{backend}");
        assert_eq!(stored.floor().value(), 1, "{backend}");
        assert!(repos.rooms.contains_of_identity(&id).await.unwrap(), "{backend}");

        let all = repos.rooms.find_all().await.unwrap();
        assert_eq!(all, vec![stored], "{backend}");

        let reused = RoomFactoryImpl.create_room_with_id(
            id.clone(),
            HouseId::new("H2").unwrap(),
            RoomName::new("Kitchen").unwrap(),
            Dimension::new(3.0, 4.0, 2.5).unwrap(),
            RoomFloor::new(0),
        );
        let err = repos.rooms.save(reused).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateIdentity { entity: "Room", .. }), "{backend}");
        assert_eq!(repos.rooms.find_all().await.unwrap().len(), 1, "{backend}");
    }
}

#[tokio::test]
async fn test_house_round_trip_keeps_address() {
    for (backend, repos) in backends().await {
        repos.houses.save(house("H1", "Rua Dr. Roberto Frias")).await.unwrap();

        let stored = repos
            .houses
            .of_identity(&HouseId::new("H1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.address().street(), "Rua Dr. Roberto Frias", "{backend}");
        assert_eq!(stored.address().postal_code().value(), "4200-465", "{backend}");
        assert_eq!(stored.address().country_code(), "PT", "{backend}");
        assert_eq!(stored.gps().latitude(), 41.17, "{backend}");
    }
}

#[tokio::test]
async fn test_house_in_registered_country_reloads() {
    let mut postal_codes = PostalCodeFactory::default();
    postal_codes.register("FR", france);

    for (backend, repos) in backends_with(postal_codes.clone()).await {
        let address =
            Address::from_raw("Rue de Rivoli", "99", "75001", "FR", &postal_codes).unwrap();
        let paris = HouseFactoryImpl.create_house_with_id(
            HouseId::new("H1").unwrap(),
            address,
            Gps::new(48.86, 2.34).unwrap(),
        );
        repos.houses.save(paris).await.unwrap();

        let stored = repos
            .houses
            .of_identity(&HouseId::new("H1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.address().postal_code().value(), "75001", "{backend}");
        assert_eq!(stored.address().country_code(), "FR", "{backend}");

        let all = repos.houses.find_all().await.unwrap();
        assert_eq!(ids(&all), ["H1"], "{backend}");
    }
}

#[tokio::test]
async fn test_unregistered_country_fails_on_reload() {
    let mut postal_codes = PostalCodeFactory::default();
    postal_codes.register("FR", france);
    let address = Address::from_raw("Rue de Rivoli", "99", "75001", "FR", &postal_codes).unwrap();

    let database = Database::in_memory().await.unwrap();
    let writer = Repositories::sqlx_with_postal_codes(&database, postal_codes);
    let reader = Repositories::sqlx(&database);
    writer
        .houses
        .save(HouseFactoryImpl.create_house_with_id(
            HouseId::new("H1").unwrap(),
            address,
            Gps::new(48.86, 2.34).unwrap(),
        ))
        .await
        .unwrap();

    let err = reader.houses.find_all().await.unwrap_err();
    assert_eq!(err, DomainError::UnsupportedRegion("FR".to_string()));
}

#[tokio::test]
async fn test_catalogue_types_round_trip() {
    for (backend, repos) in backends().await {
        let light = DeviceTypeFactoryImpl.create_device_type_with_id(
            DeviceTypeId::new("Light").unwrap(),
            TypeDescription::new("Ceiling light").unwrap(),
        );
        repos.device_types.save(light).await.unwrap();
        let stored = repos
            .device_types
            .of_identity(&DeviceTypeId::new("Light").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.description().as_str(), "Ceiling light", "{backend}");
        assert_eq!(ids(&repos.device_types.find_all().await.unwrap()), ["Light"], "{backend}");

        let temperature = SensorTypeFactoryImpl.create_sensor_type_with_id(
            SensorTypeId::new("Temperature").unwrap(),
            TypeDescription::new("Air temperature").unwrap(),
            UnitId::new("U1").unwrap(),
        );
        repos.sensor_types.save(temperature).await.unwrap();
        let stored = repos
            .sensor_types
            .of_identity(&SensorTypeId::new("Temperature").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.description().as_str(), "Air temperature", "{backend}");
        assert_eq!(stored.unit_id().as_str(), "U1", "{backend}");
        assert_eq!(
            ids(&repos.sensor_types.find_all().await.unwrap()),
            ["Temperature"],
            "{backend}"
        );

        let blind = ActuatorTypeFactoryImpl.create_actuator_type_with_id(
            ActuatorTypeId::new("Blind").unwrap(),
            TypeDescription::new("Roller blind").unwrap(),
            UnitId::new("U2").unwrap(),
        );
        repos.actuator_types.save(blind).await.unwrap();
        let stored = repos
            .actuator_types
            .of_identity(&ActuatorTypeId::new("Blind").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.description().as_str(), "Roller blind", "{backend}");
        assert_eq!(stored.unit_id().as_str(), "U2", "{backend}");
        assert_eq!(ids(&repos.actuator_types.find_all().await.unwrap()), ["Blind"], "{backend}");
    }
}

#[tokio::test]
async fn test_duplicate_rejected_and_original_kept() {
    for (backend, repos) in backends().await {
        repos.houses.save(house("H1", "First Street")).await.unwrap();

        let err = repos
            .houses
            .save(house("H1", "Second Street"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::duplicate("House", "H1"),
            "{backend}"
        );
        assert_eq!(err.to_string(), "House with ID H1 already exists.");

        let all = repos.houses.find_all().await.unwrap();
        assert_eq!(all.len(), 1, "{backend}");
        assert_eq!(all[0].address().street(), "First Street", "{backend}");
    }
}

#[tokio::test]
async fn test_find_all_in_insertion_order() {
    for (backend, repos) in backends().await {
        for (id, symbol) in [("U3", "C"), ("U1", "kWh"), ("U2", "%")] {
            let unit = UnitFactoryImpl.create_unit_with_id(
                UnitId::new(id).unwrap(),
                UnitDescription::new("Some unit").unwrap(),
                UnitSymbol::new(symbol).unwrap(),
            );
            repos.units.save(unit).await.unwrap();
        }

        let units: Vec<Unit> = repos.units.find_all().await.unwrap();
        assert_eq!(ids(&units), ["U3", "U1", "U2"], "{backend}");
    }
}

#[tokio::test]
async fn test_devices_by_room() {
    for (backend, repos) in backends().await {
        for (id, room) in [("D1", "R1"), ("D2", "R2"), ("D3", "R1")] {
            repos.devices.save(device(id, room)).await.unwrap();
        }

        let in_r1 = repos
            .devices
            .find_by_room_id(&RoomId::new("R1").unwrap())
            .await
            .unwrap();
        assert_eq!(ids(&in_r1), ["D1", "D3"], "{backend}");

        let in_r9 = repos
            .devices
            .find_by_room_id(&RoomId::new("R9").unwrap())
            .await
            .unwrap();
        assert!(in_r9.is_empty(), "{backend}");
    }
}

#[tokio::test]
async fn test_models_by_type() {
    for (backend, repos) in backends().await {
        repos
            .sensor_models
            .save(sensor_model("sensors.Thermo", "Temperature"))
            .await
            .unwrap();
        repos
            .sensor_models
            .save(sensor_model("sensors.Hygro", "Humidity"))
            .await
            .unwrap();

        let found = repos
            .sensor_models
            .find_by_sensor_type_id(&SensorTypeId::new("Humidity").unwrap())
            .await
            .unwrap();
        assert_eq!(ids(&found), ["sensors.Hygro"], "{backend}");

        let err = repos
            .sensor_models
            .save(sensor_model("sensors.Hygro", "Temperature"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::DuplicateIdentity { .. }),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn test_actuator_models_by_type() {
    for (backend, repos) in backends().await {
        repos
            .actuator_models
            .save(actuator_model("actuators.BlindRoller", "Blind"))
            .await
            .unwrap();
        repos
            .actuator_models
            .save(actuator_model("actuators.Switch", "OnOff"))
            .await
            .unwrap();
        repos
            .actuator_models
            .save(actuator_model("actuators.Shutter", "Blind"))
            .await
            .unwrap();

        let found = repos
            .actuator_models
            .find_by_actuator_type_id(&ActuatorTypeId::new("Blind").unwrap())
            .await
            .unwrap();
        assert_eq!(
            ids(&found),
            ["actuators.BlindRoller", "actuators.Shutter"],
            "{backend}"
        );
        assert_eq!(found[0].name().as_str(), "BlindRoller", "{backend}");
        assert_eq!(found[0].actuator_type_id().as_str(), "Blind", "{backend}");

        let stored = repos
            .actuator_models
            .of_identity(&ModelPath::new("actuators.Switch").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.actuator_type_id().as_str(), "OnOff", "{backend}");

        let none = repos
            .actuator_models
            .find_by_actuator_type_id(&ActuatorTypeId::new("Valve").unwrap())
            .await
            .unwrap();
        assert!(none.is_empty(), "{backend}");
    }
}

#[tokio::test]
async fn test_logs_by_device_and_period() {
    for (backend, repos) in backends().await {
        for (id, device, hour) in [
            ("L1", "D1", 7),
            ("L2", "D1", 8),
            ("L3", "D2", 10),
            ("L4", "D1", 12),
            ("L5", "D1", 18),
        ] {
            repos.logs.save(log(id, device, hour)).await.unwrap();
        }

        let d1 = DeviceId::new("D1").unwrap();
        let all = repos.logs.find_by_device_id(&d1).await.unwrap();
        assert_eq!(ids(&all), ["L1", "L2", "L4", "L5"], "{backend}");

        let period = DatePeriod::new(at(8), at(12)).unwrap();
        let within = repos
            .logs
            .find_by_device_id_and_period(&d1, &period)
            .await
            .unwrap();
        assert_eq!(ids(&within), ["L2", "L4"], "{backend}");
        assert_eq!(within[0].timestamp(), at(8), "{backend}");
    }
}

#[tokio::test]
async fn test_logs_are_append_only() {
    for (backend, repos) in backends().await {
        repos.logs.save(log("L1", "D1", 8)).await.unwrap();
        assert_eq!(
            repos.logs.update(log("L1", "D1", 9)).await.unwrap_err(),
            DomainError::UnsupportedOperation("update"),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn test_update_support_by_backend() {
    for (backend, repos) in backends().await {
        let mut lamp = repos.devices.save(device("D1", "R1")).await.unwrap();
        lamp.deactivate();
        let result = repos.devices.update(lamp).await;

        if backend == "memory" {
            assert_eq!(
                result.unwrap_err(),
                DomainError::UnsupportedOperation("update")
            );
            continue;
        }

        assert!(result.unwrap().is_some(), "{backend}");
        let stored = repos
            .devices
            .of_identity(&DeviceId::new("D1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_active(), "{backend}");

        let unknown = repos.devices.update(device("D404", "R1")).await.unwrap();
        assert!(unknown.is_none(), "{backend}");
    }
}
