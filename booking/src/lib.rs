pub mod errors;
pub mod loyalty;
pub mod manager;
pub mod types;

pub use errors::BookingError;
pub use loyalty::{LoyaltyAccount, LoyaltyRules};
pub use manager::{BookingManager, BookingReceipt, ClearOutcome, Confirmation};
pub use types::{Booking, BookingRequest, SeatClass};
