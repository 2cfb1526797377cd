use super::DataModelAssembler;
use crate::database::entities::DeviceRecord;
use domain::error::Result;
use domain::value_object::{DeviceId, DeviceName, DeviceStatus, DeviceTypeId, RoomId};
use domain::{Device, DeviceFactory, DeviceFactoryImpl};

pub struct DeviceDataModelAssembler<F = DeviceFactoryImpl> {
    factory: F,
}

impl<F: DeviceFactory> DeviceDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for DeviceDataModelAssembler {
    fn default() -> Self {
        Self::new(DeviceFactoryImpl)
    }
}

impl<F: DeviceFactory + 'static> DataModelAssembler for DeviceDataModelAssembler<F> {
    type Record = DeviceRecord;
    type Aggregate = Device;
    const PLURAL: &'static str = "devices";

    fn to_domain(&self, record: &DeviceRecord) -> Result<Device> {
        let id = DeviceId::new(record.device_id.as_str())?;
        let room_id = RoomId::new(record.room_id.as_str())?;
        let name = DeviceName::new(record.name.as_str())?;
        let status = DeviceStatus::new(record.active);
        let device_type_id = DeviceTypeId::new(record.device_type_id.as_str())?;

        Ok(self
            .factory
            .create_device_with_id(id, room_id, name, status, device_type_id))
    }

    fn to_record(&self, device: &Device) -> DeviceRecord {
        DeviceRecord::from(device)
    }
}
