use booking::{
    BookingError, BookingManager, BookingRequest, ClearOutcome, Confirmation, LoyaltyRules,
    SeatClass,
};
use graphical_interface::{
    commands::{handle, Command, NoticeKind},
    state::{FormState, SelectionState, SortDirection, SortState, TableColumn},
};

fn request(name: &str, email: &str, flight: &str, source: &str, destination: &str) -> BookingRequest {
    BookingRequest {
        passenger_name: name.to_string(),
        email: email.to_string(),
        flight_number: flight.to_string(),
        source: source.to_string(),
        destination: destination.to_string(),
        seat_class: SeatClass::Economy,
    }
}

// Alice books AA100 from NYC to LON in economy.
fn manager_after_first_booking() -> BookingManager {
    let mut manager = BookingManager::default();
    manager
        .book(request("Alice", "a@x.com", "AA100", "NYC", "LON"))
        .expect("Booking should succeed");
    manager
}

#[test]
fn test_first_booking_is_stored_and_earns_points() {
    let manager = manager_after_first_booking();

    assert_eq!(manager.len(), 1);
    let booking = manager.get(0).unwrap();
    assert_eq!(booking.passenger_name, "Alice");
    assert_eq!(booking.flight_number, "AA100");
    assert_eq!(booking.source, "NYC");
    assert_eq!(booking.destination, "LON");
    assert_eq!(booking.seat_class, SeatClass::Economy);
    assert_eq!(manager.points(), 10);
}

#[test]
fn test_booking_without_name_is_rejected() {
    let mut manager = BookingManager::default();
    let result = manager.book(request("", "a@x.com", "AA100", "NYC", "LON"));

    assert_eq!(
        result,
        Err(BookingError::Validation {
            missing: vec!["Passenger Name"]
        })
    );
    assert!(manager.is_empty());
    assert_eq!(manager.points(), 0);
}

#[test]
fn test_search_by_lowercase_flight_number() {
    let manager = manager_after_first_booking();
    assert_eq!(manager.search("aa100"), Ok(0));
}

#[test]
fn test_redeem_after_one_booking_is_refused() {
    let mut manager = manager_after_first_booking();
    assert!(matches!(
        manager.redeem_points(),
        Err(BookingError::InsufficientPoints { .. })
    ));
    assert_eq!(manager.points(), 10);
}

#[test]
fn test_redeem_after_five_bookings() {
    let mut manager = manager_after_first_booking();
    for flight in ["BA1", "BA2", "BA3", "BA4"] {
        manager
            .book(request("Bob", "b@x.com", flight, "LHR", "JFK"))
            .expect("Booking should succeed");
    }
    assert_eq!(manager.points(), 50);

    assert_eq!(manager.redeem_points(), Ok(0));
    assert_eq!(manager.points(), 0);
}

#[test]
fn test_delete_only_booking_empties_store() {
    let mut manager = manager_after_first_booking();
    let removed = manager.delete(Some(0)).expect("Delete should succeed");

    assert_eq!(removed.passenger_name, "Alice");
    assert!(manager.is_empty());
}

#[test]
fn test_clear_all_requires_confirmation() {
    let mut manager = manager_after_first_booking();

    assert_eq!(manager.clear_all(Confirmation::Declined), ClearOutcome::Cancelled);
    assert_eq!(manager.len(), 1);

    assert_eq!(manager.clear_all(Confirmation::Confirmed), ClearOutcome::Cleared(1));
    assert!(manager.is_empty());
    assert_eq!(manager.points(), 10);
}

#[test]
fn test_configured_loyalty_rules() {
    let mut manager = BookingManager::new(LoyaltyRules {
        points_per_booking: 30,
        redeem_cost: 60,
    });
    manager
        .book(request("Alice", "a@x.com", "AA100", "NYC", "LON"))
        .unwrap();
    assert!(manager.redeem_points().is_err());
    manager
        .book(request("Alice", "a@x.com", "AA101", "LON", "NYC"))
        .unwrap();
    assert_eq!(manager.redeem_points(), Ok(0));
}

#[test]
fn test_form_session_search_delete_after_sorting() {
    let mut manager = BookingManager::default();
    let mut selection = SelectionState::new();

    for (name, flight, seat) in [
        ("Carol", "LA800", SeatClass::FirstClass),
        ("Alice", "AR1132", SeatClass::Economy),
        ("Bob", "IB6844", SeatClass::Business),
    ] {
        let mut form = FormState {
            passenger_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            flight_number: flight.to_string(),
            source: "EZE".to_string(),
            destination: "MAD".to_string(),
            seat_class: seat,
        };
        let notice = handle(Command::Book, &mut manager, &mut form, &mut selection).unwrap();
        assert_eq!(notice.kind, NoticeKind::Information);
    }

    let names = |manager: &BookingManager| -> Vec<String> {
        manager
            .bookings()
            .iter()
            .map(|b| b.passenger_name.clone())
            .collect()
    };

    // A header click sorts the store itself.
    let mut sort = SortState::default();
    let direction = sort.toggle(TableColumn::PassengerName);
    assert_eq!(direction, SortDirection::Ascending);
    let mut form = FormState::default();
    let command = Command::Sort(TableColumn::PassengerName, direction);
    assert_eq!(handle(command, &mut manager, &mut form, &mut selection), None);
    assert_eq!(names(&manager), vec!["Alice", "Bob", "Carol"]);

    form.passenger_name = "BOB".to_string();
    assert_eq!(handle(Command::Search, &mut manager, &mut form, &mut selection), None);
    assert_eq!(selection.row, Some(1));

    // Flipping the sort keeps Bob selected.
    let direction = sort.toggle(TableColumn::PassengerName);
    let command = Command::Sort(TableColumn::PassengerName, direction);
    handle(command, &mut manager, &mut form, &mut selection);
    assert_eq!(names(&manager), vec!["Carol", "Bob", "Alice"]);
    assert_eq!(selection.row, Some(1));

    let notice = handle(Command::Delete, &mut manager, &mut form, &mut selection).unwrap();
    assert_eq!(notice.title, "Deleted");
    assert_eq!(names(&manager), vec!["Carol", "Alice"]);
    assert_eq!(manager.points(), 30);
}
