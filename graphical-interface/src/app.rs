use booking::BookingManager;
use egui::{Color32, FontId, RichText, TextStyle};

use crate::{
    commands::{self, Command},
    app_config::AppConfig,
    state::SelectionState,
    widgets::{NoticeResponse, WidgetBookingForm, WidgetBookingsTable, WidgetNotice},
};

const PANEL_BG: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);
const INPUT_BG: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const TABLE_BG: Color32 = Color32::from_rgb(0x3E, 0x3E, 0x3E);
const ACCENT: Color32 = Color32::from_rgb(0x00, 0x78, 0xD7);
const ACCENT_HOVER: Color32 = Color32::from_rgb(0x00, 0x53, 0xA6);

/// The reservation window.
///
/// Owns the `BookingManager` for the whole session and routes the form's
/// buttons through `commands::handle`. While a notice is open the form and
/// the table are disabled, so notices behave like modal dialogs.
pub struct ReservationApp {
    manager: BookingManager,
    selection_state: SelectionState,
    form_widget: WidgetBookingForm,
    table_widget: WidgetBookingsTable,
    notice_widget: Option<WidgetNotice>,
}

impl ReservationApp {
    pub fn new(egui_ctx: &egui::Context, config: &AppConfig) -> Self {
        apply_theme(egui_ctx);

        Self {
            manager: BookingManager::new(config.loyalty),
            selection_state: SelectionState::new(),
            form_widget: WidgetBookingForm::new(),
            table_widget: WidgetBookingsTable::new(),
            notice_widget: None,
        }
    }

    /// False while a notice waits for the user.
    fn is_interactive(&self) -> bool {
        self.notice_widget.is_none()
    }

    fn dispatch(&mut self, command: Command) {
        let notice = commands::handle(
            command,
            &mut self.manager,
            &mut self.form_widget.form,
            &mut self.selection_state,
        );
        self.notice_widget = notice.map(WidgetNotice::new);
    }
}

impl eframe::App for ReservationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut command = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("✈ Flight Reservation System ✈")
                        .size(30.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
            ui.add_space(16.0);

            let interactive = self.is_interactive();
            ui.add_enabled_ui(interactive, |ui| {
                command = self.form_widget.ui(ui);
            });

            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("Loyalty points: {}", self.manager.points()))
                    .size(16.0)
                    .color(Color32::LIGHT_GRAY),
            );
            ui.separator();

            ui.add_enabled_ui(interactive, |ui| {
                egui::Frame::none().fill(TABLE_BG).show(ui, |ui| {
                    let sort = self.table_widget.ui(
                        ui,
                        self.manager.bookings(),
                        &mut self.selection_state,
                    );
                    command = command.or(sort);
                });
            });
        });

        let response = self
            .notice_widget
            .as_ref()
            .and_then(|widget| widget.show(ctx));
        match response {
            Some(NoticeResponse::Dismissed) => self.notice_widget = None,
            Some(NoticeResponse::Answered(confirmation)) => {
                command = Some(Command::AnswerClear(confirmation));
            }
            None => {}
        }

        if let Some(command) = command {
            self.dispatch(command);
        }
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = PANEL_BG;
    style.visuals.window_fill = PANEL_BG;
    style.visuals.extreme_bg_color = INPUT_BG;
    style.visuals.faint_bg_color = TABLE_BG;
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = ACCENT;
    style.visuals.widgets.hovered.weak_bg_fill = ACCENT_HOVER;
    style.visuals.widgets.active.weak_bg_fill = ACCENT_HOVER;
    style.visuals.override_text_color = Some(Color32::WHITE);

    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(16.0));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(16.0));
    ctx.set_style(style);
}
