//! Page state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `sections`, `bookings`, `nav`,
//! `scroll_top`) so each controller owns a small focused model and can be
//! tested without the others. [`crate::itinerary::Itinerary`] composes them.

pub mod bookings;
pub mod nav;
pub mod scroll_top;
pub mod sections;
pub mod theme;
