use std::fmt;

/// Represents the cabin a passenger is booked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    FirstClass,
}

impl SeatClass {
    /// Every seat class, in the order the form offers them.
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::FirstClass];

    /// Converts the `SeatClass` variant to the label shown in the form and table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::FirstClass => "First Class",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
