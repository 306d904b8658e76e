/// Errors returned by the booking operations.
///
/// Every variant is recoverable: the user fixes the input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// One or more required form fields were left empty.
    #[error("All fields must be filled!")]
    Validation { missing: Vec<&'static str> },

    /// The search term was empty or only whitespace.
    #[error("Please enter a passenger name or flight number!")]
    EmptyQuery,

    /// No booking matched the search term.
    #[error("No matching flight found!")]
    NotFound,

    /// Delete was requested without a selected booking.
    #[error("Please select a booking to delete!")]
    NoSelection,

    /// The loyalty balance is below the redemption cost.
    #[error("You need at least {required} points to redeem a discount!")]
    InsufficientPoints { available: u32, required: u32 },
}

impl BookingError {
    /// Short title used for the notice shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            BookingError::Validation { .. } => "Input Error",
            BookingError::EmptyQuery => "Search Error",
            BookingError::NotFound => "Not Found",
            BookingError::NoSelection => "Delete Error",
            BookingError::InsufficientPoints { .. } => "Not Enough Points",
        }
    }
}
