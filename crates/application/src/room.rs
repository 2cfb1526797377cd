use domain::error::Result;
use domain::value_object::{Dimension, HouseId, RoomFloor, RoomId, RoomName};
use domain::{AggregateRoot, DomainError, House, Repository, Room, RoomFactory};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RoomService {
    rooms: Arc<dyn Repository<RoomId, Room>>,
    houses: Arc<dyn Repository<HouseId, House>>,
    factory: Arc<dyn RoomFactory>,
}

impl RoomService {
    pub fn new(
        rooms: Arc<dyn Repository<RoomId, Room>>,
        houses: Arc<dyn Repository<HouseId, House>>,
        factory: Arc<dyn RoomFactory>,
    ) -> Self {
        Self {
            rooms,
            houses,
            factory,
        }
    }

    /// Adds a room to an existing house
    pub async fn add_room(
        &self,
        house_id: &str,
        name: &str,
        width: f64,
        depth: f64,
        height: f64,
        floor: i32,
    ) -> Result<Room> {
        let house_id = HouseId::new(house_id)?;
        let name = RoomName::new(name)?;
        let dimension = Dimension::new(width, depth, height)?;

        if !self.houses.contains_of_identity(&house_id).await? {
            warn!(%house_id, "Rejected room for unknown house");
            return Err(DomainError::not_found("House", &house_id));
        }

        let room = self
            .factory
            .create_room(house_id, name, dimension, RoomFloor::new(floor));
        let room = self.rooms.save(room).await?;
        info!(room_id = %room.id(), house_id = %room.house_id(), "Room added");
        Ok(room)
    }

    pub async fn get_rooms(&self) -> Result<Vec<Room>> {
        self.rooms.find_all().await
    }

    pub async fn get_room(&self, room_id: &RoomId) -> Result<Option<Room>> {
        self.rooms.of_identity(room_id).await
    }
}
