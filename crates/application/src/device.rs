use domain::error::Result;
use domain::value_object::{DeviceId, DeviceName, DeviceTypeId, RoomId};
use domain::{
    AggregateRoot, Device, DeviceFactory, DeviceRepository, DomainError, Repository, Room,
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeviceService {
    devices: Arc<dyn DeviceRepository>,
    rooms: Arc<dyn Repository<RoomId, Room>>,
    factory: Arc<dyn DeviceFactory>,
}

impl DeviceService {
    pub fn new(
        devices: Arc<dyn DeviceRepository>,
        rooms: Arc<dyn Repository<RoomId, Room>>,
        factory: Arc<dyn DeviceFactory>,
    ) -> Self {
        Self {
            devices,
            rooms,
            factory,
        }
    }

    /// Installs a new, active device in an existing room
    pub async fn add_device(
        &self,
        room_id: &str,
        name: &str,
        device_type_id: &str,
    ) -> Result<Device> {
        let room_id = RoomId::new(room_id)?;
        let name = DeviceName::new(name)?;
        let device_type_id = DeviceTypeId::new(device_type_id)?;

        if !self.rooms.contains_of_identity(&room_id).await? {
            warn!(%room_id, "Rejected device for unknown room");
            return Err(DomainError::not_found("Room", &room_id));
        }

        let device = self
            .devices
            .save(self.factory.create_device(room_id, name, device_type_id))
            .await?;
        info!(device_id = %device.id(), room_id = %device.room_id(), "Device added");
        Ok(device)
    }

    /// Deactivates a stored device and persists the change.
    ///
    /// Deactivating an inactive device succeeds and leaves it inactive.
    pub async fn deactivate_device(&self, device_id: &DeviceId) -> Result<Device> {
        let Some(mut device) = self.devices.of_identity(device_id).await? else {
            warn!(%device_id, "Cannot deactivate unknown device");
            return Err(DomainError::not_found("Device", device_id));
        };

        let status = device.deactivate();
        let device = self
            .devices
            .update(device)
            .await?
            .ok_or_else(|| DomainError::not_found("Device", device_id))?;
        info!(%device_id, %status, "Device deactivated");
        Ok(device)
    }

    pub async fn get_devices_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>> {
        self.devices.find_by_room_id(room_id).await
    }
}
