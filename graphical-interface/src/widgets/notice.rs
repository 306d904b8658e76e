use booking::Confirmation;
use egui::{Color32, RichText};

use crate::commands::{Notice, NoticeKind};

pub enum NoticeResponse {
    Dismissed,
    Answered(Confirmation),
}

/// Centered message box for a `Notice`. Questions get Yes/No buttons, everything else OK.
pub struct WidgetNotice {
    pub notice: Notice,
}

impl WidgetNotice {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }

    pub fn show(&self, ctx: &egui::Context) -> Option<NoticeResponse> {
        let mut response = None;

        egui::Window::new(self.notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (icon, color) = match self.notice.kind {
                        NoticeKind::Information => ("ℹ", Color32::from_rgb(0, 150, 255)),
                        NoticeKind::Warning => ("⚠", Color32::from_rgb(255, 200, 0)),
                        NoticeKind::Question => ("?", Color32::from_rgb(0, 150, 255)),
                    };
                    ui.label(RichText::new(icon).size(28.0).color(color));
                    ui.label(RichText::new(&self.notice.message).size(16.0));
                });

                ui.add_space(10.0);

                ui.horizontal(|ui| match self.notice.kind {
                    NoticeKind::Question => {
                        if ui.button("Yes").clicked() {
                            response = Some(NoticeResponse::Answered(Confirmation::Confirmed));
                        }
                        if ui.button("No").clicked() {
                            response = Some(NoticeResponse::Answered(Confirmation::Declined));
                        }
                    }
                    NoticeKind::Information | NoticeKind::Warning => {
                        if ui.button("OK").clicked() {
                            response = Some(NoticeResponse::Dismissed);
                        }
                    }
                });
            });

        response
    }
}
