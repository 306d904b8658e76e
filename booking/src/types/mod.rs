mod booking;
pub use booking::{Booking, BookingRequest};

mod seat_class;
pub use seat_class::SeatClass;
