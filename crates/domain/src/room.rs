use crate::aggregate::AggregateRoot;
use crate::identity_equality;
use crate::value_object::{Dimension, HouseId, RoomFloor, RoomId, RoomName};
use serde::Serialize;

/// A room of a house. The house is referenced by ID only.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    id: RoomId,
    house_id: HouseId,
    name: RoomName,
    dimension: Dimension,
    floor: RoomFloor,
}

impl Room {
    pub(crate) fn new(
        id: RoomId,
        house_id: HouseId,
        name: RoomName,
        dimension: Dimension,
        floor: RoomFloor,
    ) -> Self {
        Self {
            id,
            house_id,
            name,
            dimension,
            floor,
        }
    }

    pub fn house_id(&self) -> &HouseId {
        &self.house_id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn floor(&self) -> RoomFloor {
        self.floor
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;
    const KIND: &'static str = "Room";

    fn id(&self) -> &RoomId {
        &self.id
    }
}

identity_equality!(Room);

/// Creates rooms, either with a fresh ID or with one read back from storage
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait RoomFactory: Send + Sync {
    fn create_room(
        &self,
        house_id: HouseId,
        name: RoomName,
        dimension: Dimension,
        floor: RoomFloor,
    ) -> Room;

    fn create_room_with_id(
        &self,
        id: RoomId,
        house_id: HouseId,
        name: RoomName,
        dimension: Dimension,
        floor: RoomFloor,
    ) -> Room;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoomFactoryImpl;

impl RoomFactory for RoomFactoryImpl {
    fn create_room(
        &self,
        house_id: HouseId,
        name: RoomName,
        dimension: Dimension,
        floor: RoomFloor,
    ) -> Room {
        Room::new(RoomId::generate(), house_id, name, dimension, floor)
    }

    fn create_room_with_id(
        &self,
        id: RoomId,
        house_id: HouseId,
        name: RoomName,
        dimension: Dimension,
        floor: RoomFloor,
    ) -> Room {
        Room::new(id, house_id, name, dimension, floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn living_room(factory: &RoomFactoryImpl) -> Room {
        factory.create_room(
            HouseId::new("H1").unwrap(),
            RoomName::new("Living Room").unwrap(),
            Dimension::new(10.0, 10.0, 10.0).unwrap(),
            RoomFloor::new(1),
        )
    }

    #[test]
    fn test_create_room() {
        let room = living_room(&RoomFactoryImpl);
        assert_eq!(room.house_id().as_str(), "H1");
        assert_eq!(room.name().as_str(), "Living Room");
        assert_eq!(room.dimension().height(), 10.0);
        assert_eq!(room.floor().value(), 1);
    }

    #[test]
    fn test_same_fields_different_ids_are_unequal() {
        let a = living_room(&RoomFactoryImpl);
        let b = living_room(&RoomFactoryImpl);
        assert_ne!(a, b);
    }

    #[test]
    fn test_reconstructed_room_equals_original() {
        let factory = RoomFactoryImpl;
        let original = living_room(&factory);
        let copy = factory.create_room_with_id(
            original.id().clone(),
            HouseId::new("H2").unwrap(),
            RoomName::new("Kitchen").unwrap(),
            Dimension::new(1.0, 2.0, 3.0).unwrap(),
            RoomFloor::new(0),
        );
        assert_eq!(original, copy);

        let set: HashSet<_> = [original, copy].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
