use super::SeatClass;

/// A single reservation as it is kept in the store and shown in the table.
///
/// Bookings carry no identifier: they are addressed by their position in the
/// store, and two identical bookings may coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub passenger_name: String,
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub seat_class: SeatClass,
}

impl Booking {
    /// Case-insensitive substring match against passenger name or flight number.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.passenger_name.to_lowercase().contains(needle)
            || self.flight_number.to_lowercase().contains(needle)
    }
}

/// The contents of the booking form when the user presses "Book Flight".
///
/// The email is only used to address the confirmation and never reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub passenger_name: String,
    pub email: String,
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub seat_class: SeatClass,
}

impl BookingRequest {
    /// Labels of the required fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Passenger Name", &self.passenger_name),
            ("Email", &self.email),
            ("Flight Number", &self.flight_number),
            ("Source", &self.source),
            ("Destination", &self.destination),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Drops the email and turns the request into a stored booking.
    pub(crate) fn into_booking(self) -> Booking {
        Booking {
            passenger_name: self.passenger_name,
            flight_number: self.flight_number,
            source: self.source,
            destination: self.destination,
            seat_class: self.seat_class,
        }
    }
}
