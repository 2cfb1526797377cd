use super::ActuatorModel;
use crate::error::Result;
use crate::repository::Repository;
use crate::value_object::{ActuatorTypeId, ModelPath};
use async_trait::async_trait;

#[async_trait]
pub trait ActuatorModelRepository: Repository<ModelPath, ActuatorModel> {
    async fn find_by_actuator_type_id(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>>;
}
