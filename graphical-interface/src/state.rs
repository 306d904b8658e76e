use std::cmp::Ordering;

use booking::{Booking, BookingRequest, SeatClass};

/// Contents of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub passenger_name: String,
    pub email: String,
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub seat_class: SeatClass,
}

impl FormState {
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            passenger_name: self.passenger_name.clone(),
            email: self.email.clone(),
            flight_number: self.flight_number.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
            seat_class: self.seat_class,
        }
    }

    /// The search box is the passenger name field.
    pub fn search_query(&self) -> &str {
        &self.passenger_name
    }

    /// Empties every field and puts the seat back on its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Tracks which booking is selected in the table, by store position.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub row: Option<usize>,
    reveal: bool,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self::default()
    }

    /// Selects a booking and asks the table to scroll to it.
    pub fn select(&mut self, position: usize) {
        self.row = Some(position);
        self.reveal = true;
    }

    /// If the provided row is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_row_selection(&mut self, position: usize) {
        if self.row == Some(position) {
            self.row = None;
        } else {
            self.row = Some(position);
        }
    }

    /// Keeps the same booking selected after the store was reordered.
    ///
    /// `previous` holds the old position of each booking, in the new order.
    pub fn follow_reorder(&mut self, previous: &[usize]) {
        if let Some(row) = self.row {
            self.row = previous.iter().position(|&old| old == row);
            self.reveal = self.row.is_some();
        }
    }

    pub fn clear(&mut self) {
        self.row = None;
        self.reveal = false;
    }

    /// Returns whether the table should scroll to the selection, once.
    pub fn take_reveal(&mut self) -> bool {
        std::mem::take(&mut self.reveal)
    }
}

/// Columns of the bookings table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    PassengerName,
    FlightNumber,
    Source,
    Destination,
    SeatType,
}

impl TableColumn {
    pub const ALL: [TableColumn; 5] = [
        TableColumn::PassengerName,
        TableColumn::FlightNumber,
        TableColumn::Source,
        TableColumn::Destination,
        TableColumn::SeatType,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TableColumn::PassengerName => "Passenger Name",
            TableColumn::FlightNumber => "Flight No",
            TableColumn::Source => "Source",
            TableColumn::Destination => "Destination",
            TableColumn::SeatType => "Seat Type",
        }
    }

    pub fn value<'a>(&self, booking: &'a Booking) -> &'a str {
        match self {
            TableColumn::PassengerName => &booking.passenger_name,
            TableColumn::FlightNumber => &booking.flight_number,
            TableColumn::Source => &booking.source,
            TableColumn::Destination => &booking.destination,
            TableColumn::SeatType => booking.seat_class.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort indicator of the bookings table.
///
/// Clicking a header sorts the store itself by that column, so the order on
/// screen is the order search walks through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<(TableColumn, SortDirection)>,
}

impl SortState {
    /// First click on a column sorts ascending, each further click flips the direction.
    pub fn toggle(&mut self, column: TableColumn) -> SortDirection {
        let direction = match self.key {
            Some((current, SortDirection::Ascending)) if current == column => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.key = Some((column, direction));
        direction
    }

    pub fn direction_of(&self, column: TableColumn) -> Option<SortDirection> {
        match self.key {
            Some((current, direction)) if current == column => Some(direction),
            _ => None,
        }
    }
}

/// Orders two bookings by the text of `column`.
pub fn compare_bookings(
    column: TableColumn,
    direction: SortDirection,
    a: &Booking,
    b: &Booking,
) -> Ordering {
    let ordering = column.value(a).cmp(column.value(b));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
