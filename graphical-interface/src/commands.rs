//! Handlers for the form's buttons and the table headers.
//!
//! Each command runs one `BookingManager` operation against the current form
//! and selection, and returns the notice to show, if any.

use booking::{BookingError, BookingManager, ClearOutcome, Confirmation};
use tracing::debug;

use crate::state::{compare_bookings, FormState, SelectionState, SortDirection, TableColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Book,
    Search,
    Delete,
    RedeemPoints,
    /// Asks for confirmation before clearing.
    ClearAll,
    /// The user's answer to the clear-all question.
    AnswerClear(Confirmation),
    /// A table header was clicked.
    Sort(TableColumn, SortDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Information,
    Warning,
    /// A yes/no question; answering it dispatches `Command::AnswerClear`.
    Question,
}

/// A message box shown over the form until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn information(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Information,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn question(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Question,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

impl From<&BookingError> for Notice {
    fn from(error: &BookingError) -> Self {
        match error {
            // A search without hits is not the user's mistake.
            BookingError::NotFound => Notice::information(error.title(), error.to_string()),
            _ => Notice::warning(error.title(), error.to_string()),
        }
    }
}

/// Runs `command` and returns the notice it produced.
pub fn handle(
    command: Command,
    manager: &mut BookingManager,
    form: &mut FormState,
    selection: &mut SelectionState,
) -> Option<Notice> {
    let result = match command {
        Command::Book => book(manager, form),
        Command::Search => search(manager, form, selection),
        Command::Delete => delete(manager, selection),
        Command::RedeemPoints => redeem(manager),
        Command::ClearAll => Ok(Some(Notice::question(
            "Confirm",
            "Are you sure you want to clear all bookings?",
        ))),
        Command::AnswerClear(confirmation) => Ok(clear(manager, selection, confirmation)),
        Command::Sort(column, direction) => {
            let previous = manager.sort_by(|a, b| compare_bookings(column, direction, a, b));
            selection.follow_reorder(&previous);
            Ok(None)
        }
    };

    result.unwrap_or_else(|error| {
        debug!(?command, %error, "action rejected");
        Some(Notice::from(&error))
    })
}

fn book(manager: &mut BookingManager, form: &mut FormState) -> Result<Option<Notice>, BookingError> {
    let receipt = manager.book(form.to_request())?;
    form.reset();
    Ok(Some(Notice::information(
        "Success",
        format!(
            "Flight booked successfully!\nEmail Confirmation Sent.\nYou earned {} points!",
            receipt.points_earned
        ),
    )))
}

fn search(
    manager: &BookingManager,
    form: &FormState,
    selection: &mut SelectionState,
) -> Result<Option<Notice>, BookingError> {
    let position = manager.search(form.search_query())?;
    selection.select(position);
    Ok(None)
}

fn delete(
    manager: &mut BookingManager,
    selection: &mut SelectionState,
) -> Result<Option<Notice>, BookingError> {
    manager.delete(selection.row)?;
    selection.clear();
    Ok(Some(Notice::information(
        "Deleted",
        "Booking removed successfully!",
    )))
}

fn redeem(manager: &mut BookingManager) -> Result<Option<Notice>, BookingError> {
    manager.redeem_points()?;
    Ok(Some(Notice::information(
        "Redeemed",
        format!(
            "You redeemed {} points for a discount!",
            manager.rules().redeem_cost
        ),
    )))
}

fn clear(
    manager: &mut BookingManager,
    selection: &mut SelectionState,
    confirmation: Confirmation,
) -> Option<Notice> {
    match manager.clear_all(confirmation) {
        ClearOutcome::Cleared(_) => {
            selection.clear();
            Some(Notice::information(
                "Cleared",
                "All reservations have been cleared!",
            ))
        }
        ClearOutcome::Cancelled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking::SeatClass;

    fn filled_form(name: &str, flight: &str) -> FormState {
        FormState {
            passenger_name: name.to_string(),
            email: "passenger@example.com".to_string(),
            flight_number: flight.to_string(),
            source: "EZE".to_string(),
            destination: "MAD".to_string(),
            seat_class: SeatClass::Business,
        }
    }

    fn setup() -> (BookingManager, FormState, SelectionState) {
        (BookingManager::default(), FormState::default(), SelectionState::new())
    }

    #[test]
    fn test_book_resets_form_and_reports_points() {
        let (mut manager, _, mut selection) = setup();
        let mut form = filled_form("Alice", "AR1132");

        let notice = handle(Command::Book, &mut manager, &mut form, &mut selection).unwrap();

        assert_eq!(notice.kind, NoticeKind::Information);
        assert_eq!(notice.title, "Success");
        assert!(notice.message.contains("You earned 10 points!"));
        assert_eq!(form, FormState::default());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_book_with_missing_field_keeps_form() {
        let (mut manager, _, mut selection) = setup();
        let mut form = filled_form("Alice", "AR1132");
        form.email.clear();

        let notice = handle(Command::Book, &mut manager, &mut form, &mut selection).unwrap();

        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.message, "All fields must be filled!");
        assert_eq!(form.passenger_name, "Alice");
        assert!(manager.is_empty());
    }

    #[test]
    fn test_search_uses_name_field_and_selects_row() {
        let (mut manager, _, mut selection) = setup();
        handle(Command::Book, &mut manager, &mut filled_form("Alice", "AR1132"), &mut selection);
        handle(Command::Book, &mut manager, &mut filled_form("Bob", "IB6844"), &mut selection);

        let mut form = FormState {
            passenger_name: "ib68".to_string(),
            ..Default::default()
        };
        let notice = handle(Command::Search, &mut manager, &mut form, &mut selection);

        assert_eq!(notice, None);
        assert_eq!(selection.row, Some(1));
        assert!(selection.take_reveal());
    }

    #[test]
    fn test_search_errors() {
        let (mut manager, mut form, mut selection) = setup();

        let notice = handle(Command::Search, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.title, "Search Error");

        form.passenger_name = "nobody".to_string();
        let notice = handle(Command::Search, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.kind, NoticeKind::Information);
        assert_eq!(notice.message, "No matching flight found!");
        assert_eq!(selection.row, None);
    }

    #[test]
    fn test_delete_needs_selection() {
        let (mut manager, mut form, mut selection) = setup();
        handle(Command::Book, &mut manager, &mut filled_form("Alice", "AR1132"), &mut selection);

        let notice = handle(Command::Delete, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.title, "Delete Error");
        assert_eq!(manager.len(), 1);

        selection.toggle_row_selection(0);
        let notice = handle(Command::Delete, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.title, "Deleted");
        assert!(manager.is_empty());
        assert_eq!(selection.row, None);
    }

    #[test]
    fn test_redeem_messages() {
        let (mut manager, mut form, mut selection) = setup();

        let notice = handle(Command::RedeemPoints, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.title, "Not Enough Points");
        assert_eq!(
            notice.message,
            "You need at least 50 points to redeem a discount!"
        );

        for i in 0..5 {
            handle(
                Command::Book,
                &mut manager,
                &mut filled_form("Alice", &format!("AR{}", i)),
                &mut selection,
            );
        }
        let notice = handle(Command::RedeemPoints, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.title, "Redeemed");
        assert_eq!(notice.message, "You redeemed 50 points for a discount!");
        assert_eq!(manager.points(), 0);
    }

    #[test]
    fn test_search_after_sorting_selects_first_visible_match() {
        let (mut manager, mut form, mut selection) = setup();
        handle(Command::Book, &mut manager, &mut filled_form("Alicia", "AA101"), &mut selection);
        handle(Command::Book, &mut manager, &mut filled_form("Alice", "AA100"), &mut selection);

        let sort = Command::Sort(TableColumn::PassengerName, SortDirection::Ascending);
        assert_eq!(handle(sort, &mut manager, &mut form, &mut selection), None);

        form.passenger_name = "ali".to_string();
        assert_eq!(handle(Command::Search, &mut manager, &mut form, &mut selection), None);
        assert_eq!(selection.row, Some(0));
        assert_eq!(manager.get(0).unwrap().passenger_name, "Alice");
    }

    #[test]
    fn test_sort_keeps_selected_booking_selected() {
        let (mut manager, mut form, mut selection) = setup();
        for (name, flight) in [("Carol", "LA800"), ("Alice", "AR1132"), ("Bob", "IB6844")] {
            handle(Command::Book, &mut manager, &mut filled_form(name, flight), &mut selection);
        }
        selection.toggle_row_selection(0);

        let sort = Command::Sort(TableColumn::FlightNumber, SortDirection::Descending);
        handle(sort, &mut manager, &mut form, &mut selection);

        let row = selection.row.unwrap();
        assert_eq!(manager.get(row).unwrap().passenger_name, "Carol");
        assert_eq!(manager.get(0).unwrap().flight_number, "LA800");
    }

    #[test]
    fn test_clear_all_asks_first() {
        let (mut manager, mut form, mut selection) = setup();
        handle(Command::Book, &mut manager, &mut filled_form("Alice", "AR1132"), &mut selection);
        selection.select(0);

        let notice = handle(Command::ClearAll, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.kind, NoticeKind::Question);
        assert_eq!(manager.len(), 1);

        let declined = Command::AnswerClear(Confirmation::Declined);
        assert_eq!(handle(declined, &mut manager, &mut form, &mut selection), None);
        assert_eq!(manager.len(), 1);
        assert_eq!(selection.row, Some(0));

        let confirmed = Command::AnswerClear(Confirmation::Confirmed);
        let notice = handle(confirmed, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.title, "Cleared");
        assert!(manager.is_empty());
        assert_eq!(selection.row, None);
        assert_eq!(manager.points(), 10);
    }
}
