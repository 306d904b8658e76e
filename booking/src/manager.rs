use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::{
    errors::BookingError,
    loyalty::{LoyaltyAccount, LoyaltyRules},
    types::{Booking, BookingRequest},
};

/// What the user answered when asked to clear every booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Result of a clear-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The store was emptied; holds how many bookings were removed.
    Cleared(usize),
    Cancelled,
}

/// Returned by a successful booking so the caller can notify the passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub position: usize,
    pub points_earned: u32,
    pub total_points: u32,
    /// Address the confirmation was sent to. Not kept anywhere else.
    pub confirmation_email: String,
}

/// Owns the bookings of the session and the loyalty balance.
///
/// Bookings are kept in insertion order and addressed by position.
#[derive(Debug, Default)]
pub struct BookingManager {
    bookings: Vec<Booking>,
    loyalty: LoyaltyAccount,
}

impl BookingManager {
    pub fn new(rules: LoyaltyRules) -> Self {
        Self {
            bookings: Vec::new(),
            loyalty: LoyaltyAccount::new(rules),
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, position: usize) -> Option<&Booking> {
        self.bookings.get(position)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn points(&self) -> u32 {
        self.loyalty.points()
    }

    pub fn rules(&self) -> LoyaltyRules {
        self.loyalty.rules()
    }

    /// Validates the request, stores the booking and credits loyalty points.
    ///
    /// Nothing changes when a required field is empty.
    pub fn book(&mut self, request: BookingRequest) -> Result<BookingReceipt, BookingError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "rejected booking with empty fields");
            return Err(BookingError::Validation { missing });
        }

        let confirmation_email = request.email.clone();
        let booking = request.into_booking();
        info!(
            flight = %booking.flight_number,
            seat = %booking.seat_class,
            "booking stored, confirmation sent"
        );
        self.bookings.push(booking);
        let points_earned = self.loyalty.earn();

        Ok(BookingReceipt {
            position: self.bookings.len() - 1,
            points_earned,
            total_points: self.loyalty.points(),
            confirmation_email,
        })
    }

    /// Returns the position of the first booking whose passenger name or
    /// flight number contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<usize, BookingError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(BookingError::EmptyQuery);
        }

        let position = self
            .bookings
            .iter()
            .position(|booking| booking.matches(&needle))
            .ok_or(BookingError::NotFound)?;
        debug!(position, "search matched");
        Ok(position)
    }

    /// Removes the selected booking. Later bookings move up one position.
    pub fn delete(&mut self, selected: Option<usize>) -> Result<Booking, BookingError> {
        match selected {
            Some(position) if position < self.bookings.len() => {
                let removed = self.bookings.remove(position);
                info!(position, flight = %removed.flight_number, "booking removed");
                Ok(removed)
            }
            _ => Err(BookingError::NoSelection),
        }
    }

    /// Reorders the store with a stable sort, so equal bookings keep their
    /// relative order.
    ///
    /// Returns the previous position of each booking, in the new order.
    pub fn sort_by<F>(&mut self, mut compare: F) -> Vec<usize>
    where
        F: FnMut(&Booking, &Booking) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.bookings.len()).collect();
        order.sort_by(|&a, &b| compare(&self.bookings[a], &self.bookings[b]));

        let mut previous: Vec<Option<Booking>> = self.bookings.drain(..).map(Some).collect();
        self.bookings = order
            .iter()
            .filter_map(|&position| previous[position].take())
            .collect();
        debug!(count = self.bookings.len(), "bookings reordered");
        order
    }

    /// Spends loyalty points for a discount and returns the remaining balance.
    pub fn redeem_points(&mut self) -> Result<u32, BookingError> {
        let remaining = self.loyalty.redeem()?;
        info!(remaining, "loyalty points redeemed");
        Ok(remaining)
    }

    /// Empties the store once the user has confirmed. Loyalty points are kept.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> ClearOutcome {
        match confirmation {
            Confirmation::Confirmed => {
                let removed = self.bookings.len();
                self.bookings.clear();
                info!(removed, "all bookings cleared");
                ClearOutcome::Cleared(removed)
            }
            Confirmation::Declined => ClearOutcome::Cancelled,
        }
    }
}
