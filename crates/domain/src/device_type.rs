use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{DeviceTypeId, TypeDescription};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DeviceType {
    id: DeviceTypeId,
    description: TypeDescription,
}

impl DeviceType {
    pub(crate) fn new(id: DeviceTypeId, description: TypeDescription) -> Self {
        Self { id, description }
    }

    pub fn description(&self) -> &TypeDescription {
        &self.description
    }
}

impl AggregateRoot for DeviceType {
    type Id = DeviceTypeId;
    const KIND: &'static str = "Device type";

    fn id(&self) -> &DeviceTypeId {
        &self.id
    }
}

identity_equality!(DeviceType);

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait DeviceTypeFactory: Send + Sync {
    fn create_device_type(&self, description: TypeDescription) -> DeviceType;

    fn create_device_type_with_id(
        &self,
        id: DeviceTypeId,
        description: TypeDescription,
    ) -> DeviceType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceTypeFactoryImpl;

impl DeviceTypeFactory for DeviceTypeFactoryImpl {
    fn create_device_type(&self, description: TypeDescription) -> DeviceType {
        DeviceType::new(DeviceTypeId::generate(), description)
    }

    fn create_device_type_with_id(
        &self,
        id: DeviceTypeId,
        description: TypeDescription,
    ) -> DeviceType {
        DeviceType::new(id, description)
    }
}
