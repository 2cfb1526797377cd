use super::Device;
use crate::error::Result;
use crate::repository::Repository;
use crate::value_object::{DeviceId, RoomId};
use async_trait::async_trait;

#[async_trait]
pub trait DeviceRepository: Repository<DeviceId, Device> {
    /// Devices installed in the given room, in insertion order
    async fn find_by_room_id(&self, room_id: &RoomId) -> Result<Vec<Device>>;
}
