use booking::Booking;
use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    commands::Command,
    state::{SelectionState, SortDirection, SortState, TableColumn},
};

pub struct WidgetBookingsTable {
    sort: SortState,
}

impl WidgetBookingsTable {
    pub fn new() -> Self {
        Self {
            sort: SortState::default(),
        }
    }

    /// Draws the bookings in store order. Clicking a row toggles its selection,
    /// clicking a header returns the sort to apply to the store.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        bookings: &[Booking],
        selection: &mut SelectionState,
    ) -> Option<Command> {
        if bookings.is_empty() {
            ui.label("No bookings yet.");
        }

        let reveal = selection.take_reveal().then_some(selection.row).flatten();

        let mut clicked_header: Option<TableColumn> = None;
        let mut clicked_row: Option<usize> = None;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::remainder().at_least(100.0), TableColumn::ALL.len());
        if let Some(position) = reveal {
            table = table.scroll_to_row(position, Some(egui::Align::Center));
        }

        table
            .header(30.0, |mut header| {
                for column in TableColumn::ALL {
                    header.col(|ui| {
                        let arrow = match self.sort.direction_of(column) {
                            Some(SortDirection::Ascending) => " ▲",
                            Some(SortDirection::Descending) => " ▼",
                            None => "",
                        };
                        let title = RichText::new(format!("{}{}", column.title(), arrow))
                            .color(Color32::YELLOW)
                            .size(16.0)
                            .strong();
                        if ui.add(egui::Button::new(title).frame(false)).clicked() {
                            clicked_header = Some(column);
                        }
                    });
                }
            })
            .body(|mut body| {
                for (position, booking) in bookings.iter().enumerate() {
                    body.row(24.0, |mut row| {
                        row.set_selected(selection.row == Some(position));
                        for column in TableColumn::ALL {
                            row.col(|ui| {
                                ui.label(
                                    RichText::new(column.value(booking))
                                        .color(Color32::WHITE)
                                        .size(14.0),
                                );
                            });
                        }
                        if row.response().clicked() {
                            clicked_row = Some(position);
                        }
                    });
                }
            });

        if let Some(position) = clicked_row {
            selection.toggle_row_selection(position);
            tracing::debug!(selected = ?selection.row, "table selection changed");
        }
        clicked_header.map(|column| Command::Sort(column, self.sort.toggle(column)))
    }
}
