//! Join students into their rooms.

use indexmap::IndexMap;

use crate::model::{CombinedRoom, RecordId, Room, RoomStudent, Student};

/// Join `students` into `rooms` on `student.room == room.id`.
///
/// Rooms keep the order of their first occurrence in the input; a duplicate
/// room id replaces the earlier entry's value but not its position. Students
/// keep their input order within each room. A student whose `room` matches
/// no loaded room is dropped silently.
pub fn combine(rooms: &[Room], students: &[Student]) -> Vec<CombinedRoom> {
    let mut by_id: IndexMap<RecordId, CombinedRoom> = IndexMap::with_capacity(rooms.len());
    for room in rooms {
        // IndexMap::insert replaces the value but keeps the key's original
        // position, which is exactly the duplicate-id semantics we need.
        by_id.insert(
            room.id.clone(),
            CombinedRoom {
                id: room.id.clone(),
                name: room.name.clone(),
                students: Vec::new(),
            },
        );
    }

    for student in students {
        if let Some(room) = by_id.get_mut(&student.room) {
            room.students.push(RoomStudent {
                id: student.id.clone(),
                name: student.name.clone(),
            });
        }
    }

    by_id.into_values().collect()
}
