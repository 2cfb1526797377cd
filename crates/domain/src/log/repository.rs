use super::Log;
use crate::error::Result;
use crate::repository::Repository;
use crate::value_object::{DatePeriod, DeviceId, LogId};
use async_trait::async_trait;

#[async_trait]
pub trait LogRepository: Repository<LogId, Log> {
    async fn find_by_device_id(&self, device_id: &DeviceId) -> Result<Vec<Log>>;

    /// Logs of `device_id` whose timestamp falls inside `period` (inclusive)
    async fn find_by_device_id_and_period(
        &self,
        device_id: &DeviceId,
        period: &DatePeriod,
    ) -> Result<Vec<Log>>;
}
