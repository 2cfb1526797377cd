use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{DeviceId, DeviceName, DeviceStatus, DeviceTypeId, RoomId};
use serde::Serialize;

/// A device installed in a room.
///
/// # Lifecycle
/// - Created active
/// - `deactivate` moves it to inactive; there is no way back
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    id: DeviceId,
    room_id: RoomId,
    name: DeviceName,
    status: DeviceStatus,
    device_type_id: DeviceTypeId,
}

impl Device {
    pub(crate) fn new(
        id: DeviceId,
        room_id: RoomId,
        name: DeviceName,
        status: DeviceStatus,
        device_type_id: DeviceTypeId,
    ) -> Self {
        Self {
            id,
            room_id,
            name,
            status,
            device_type_id,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn device_type_id(&self) -> &DeviceTypeId {
        &self.device_type_id
    }

    /// Take the device out of service and return the new status.
    ///
    /// Calling it on an inactive device is a no-op.
    pub fn deactivate(&mut self) -> DeviceStatus {
        self.status = DeviceStatus::INACTIVE;
        self.status
    }
}

impl AggregateRoot for Device {
    type Id = DeviceId;
    const KIND: &'static str = "Device";

    fn id(&self) -> &DeviceId {
        &self.id
    }
}

identity_equality!(Device);
