//! sea-orm entities for the Evently backend.

pub mod bookings;
pub mod events;
pub mod users;
