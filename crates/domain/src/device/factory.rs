use super::Device;
use crate::value_object::{DeviceId, DeviceName, DeviceStatus, DeviceTypeId, RoomId};

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait DeviceFactory: Send + Sync {
    /// New devices start active
    fn create_device(
        &self,
        room_id: RoomId,
        name: DeviceName,
        device_type_id: DeviceTypeId,
    ) -> Device;

    fn create_device_with_id(
        &self,
        id: DeviceId,
        room_id: RoomId,
        name: DeviceName,
        status: DeviceStatus,
        device_type_id: DeviceTypeId,
    ) -> Device;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceFactoryImpl;

impl DeviceFactory for DeviceFactoryImpl {
    fn create_device(
        &self,
        room_id: RoomId,
        name: DeviceName,
        device_type_id: DeviceTypeId,
    ) -> Device {
        Device::new(
            DeviceId::generate(),
            room_id,
            name,
            DeviceStatus::ACTIVE,
            device_type_id,
        )
    }

    fn create_device_with_id(
        &self,
        id: DeviceId,
        room_id: RoomId,
        name: DeviceName,
        status: DeviceStatus,
        device_type_id: DeviceTypeId,
    ) -> Device {
        Device::new(id, room_id, name, status, device_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateRoot;

    #[test]
    fn test_create_device_is_active() {
        let device = DeviceFactoryImpl.create_device(
            RoomId::new("R1").unwrap(),
            DeviceName::new("Heater").unwrap(),
            DeviceTypeId::new("Heating").unwrap(),
        );
        assert!(device.is_active());
        assert_eq!(device.room_id().as_str(), "R1");
    }

    #[test]
    fn test_create_with_id_keeps_status() {
        let device = DeviceFactoryImpl.create_device_with_id(
            DeviceId::new("D7").unwrap(),
            RoomId::new("R1").unwrap(),
            DeviceName::new("Heater").unwrap(),
            DeviceStatus::INACTIVE,
            DeviceTypeId::new("Heating").unwrap(),
        );
        assert_eq!(device.id().as_str(), "D7");
        assert!(!device.is_active());
    }
}
