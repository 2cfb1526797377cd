use super::DataModelAssembler;
use crate::database::entities::RoomRecord;
use domain::error::Result;
use domain::value_object::{Dimension, HouseId, RoomFloor, RoomId, RoomName};
use domain::{Room, RoomFactory, RoomFactoryImpl};

pub struct RoomDataModelAssembler<F = RoomFactoryImpl> {
    factory: F,
}

impl<F: RoomFactory> RoomDataModelAssembler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl Default for RoomDataModelAssembler {
    fn default() -> Self {
        Self::new(RoomFactoryImpl)
    }
}

impl<F: RoomFactory + 'static> DataModelAssembler for RoomDataModelAssembler<F> {
    type Record = RoomRecord;
    type Aggregate = Room;
    const PLURAL: &'static str = "rooms";

    fn to_domain(&self, record: &RoomRecord) -> Result<Room> {
        let id = RoomId::new(record.room_id.as_str())?;
        let house_id = HouseId::new(record.house_id.as_str())?;
        let name = RoomName::new(record.name.as_str())?;
        let dimension = Dimension::new(record.width, record.depth, record.height)?;
        let floor = RoomFloor::new(record.floor);

        Ok(self
            .factory
            .create_room_with_id(id, house_id, name, dimension, floor))
    }

    fn to_record(&self, room: &Room) -> RoomRecord {
        RoomRecord::from(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AggregateRoot;
    use domain::DomainError;
    use domain::room::MockRoomFactory;

    fn record() -> RoomRecord {
        RoomRecord {
            room_id: "R1".to_string(),
            house_id: "H1".to_string(),
            name: "Living Room".to_string(),
            width: 10.0,
            depth: 10.0,
            height: 10.0,
            floor: 1,
        }
    }

    #[test]
    fn test_round_trip() {
        let assembler = RoomDataModelAssembler::default();
        let room = assembler.to_domain(&record()).unwrap();
        assert_eq!(room.id().as_str(), "R1");

        let back = assembler.to_record(&room);
        assert_eq!(back, record());
        assert_eq!(assembler.to_domain(&back).unwrap(), room);
    }

    #[test]
    fn test_uses_reconstruction_path() {
        let mut factory = MockRoomFactory::new();
        factory.expect_create_room().never();
        factory
            .expect_create_room_with_id()
            .withf(|id, house_id, _, _, floor| {
                id.as_str() == "R1" && house_id.as_str() == "H1" && floor.value() == 1
            })
            .times(1)
            .returning(|id, house_id, name, dimension, floor| {
                RoomFactoryImpl.create_room_with_id(id, house_id, name, dimension, floor)
            });

        let assembler = RoomDataModelAssembler::new(factory);
        assert!(assembler.to_domain(&record()).is_ok());
    }

    #[test]
    fn test_corrupt_record_rejected() {
        let assembler = RoomDataModelAssembler::default();
        let mut corrupt = record();
        corrupt.width = -1.0;
        assert_eq!(
            assembler.to_domain(&corrupt).unwrap_err(),
            DomainError::validation("width", "must be positive")
        );

        let mut blank = record();
        blank.name = "  ".to_string();
        assert!(assembler.to_domain(&blank).unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_list_rejected() {
        let assembler = RoomDataModelAssembler::default();
        assert_eq!(
            assembler.to_domain_list(&[]).unwrap_err(),
            DomainError::EmptyList("rooms")
        );
    }

    #[test]
    fn test_list_conversion_keeps_order() {
        let assembler = RoomDataModelAssembler::default();
        let mut second = record();
        second.room_id = "R2".to_string();

        let rooms = assembler.to_domain_list(&[record(), second]).unwrap();
        let ids: Vec<_> = rooms.iter().map(|room| room.id().as_str()).collect();
        assert_eq!(ids, ["R1", "R2"]);
    }
}
