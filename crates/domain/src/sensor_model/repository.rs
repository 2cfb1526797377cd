use super::SensorModel;
use crate::error::Result;
use crate::repository::Repository;
use crate::value_object::{ModelPath, SensorTypeId};
use async_trait::async_trait;

#[async_trait]
pub trait SensorModelRepository: Repository<ModelPath, SensorModel> {
    async fn find_by_sensor_type_id(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>>;
}
