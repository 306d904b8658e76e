use booking::SeatClass;
use egui::{self, TextEdit};

use crate::{commands::Command, state::FormState};

const BUTTON_SIZE: [f32; 2] = [170.0, 40.0];

/// The booking form: six labeled inputs followed by the action buttons.
///
/// The form only collects input. Pressing a button yields the matching
/// `Command`, which the app runs against the booking manager.
pub struct WidgetBookingForm {
    pub form: FormState,
}

impl WidgetBookingForm {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
        }
    }

    /// Draws the inputs and buttons. Returns the command of the button pressed this frame.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<Command> {
        egui::Grid::new("booking_form")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                text_row(ui, "Passenger Name:", "Enter Passenger Name", &mut self.form.passenger_name);
                text_row(ui, "Email:", "Enter Email for Confirmation", &mut self.form.email);
                text_row(ui, "Flight Number:", "Enter Flight Number", &mut self.form.flight_number);
                text_row(ui, "Source:", "Enter Source", &mut self.form.source);
                text_row(ui, "Destination:", "Enter Destination", &mut self.form.destination);

                ui.label("Seat Type:");
                egui::ComboBox::from_id_salt("seat_type_combo")
                    .selected_text(self.form.seat_class.as_str())
                    .show_ui(ui, |ui| {
                        for seat in SeatClass::ALL {
                            ui.selectable_value(&mut self.form.seat_class, seat, seat.as_str());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(12.0);

        let mut command = None;
        ui.horizontal(|ui| {
            let buttons = [
                ("✈ Book Flight", Command::Book),
                ("🔍 Search", Command::Search),
                ("❌ Delete Booking", Command::Delete),
                ("🎟 Redeem Points", Command::RedeemPoints),
                ("🗑 Clear All", Command::ClearAll),
            ];
            for (label, action) in buttons {
                if ui
                    .add_sized(BUTTON_SIZE, egui::Button::new(label).rounding(8.0))
                    .clicked()
                {
                    command = Some(action);
                }
            }
        });
        command
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.end_row();
}
