mod booking_form;
mod bookings_table;
mod notice;
pub use booking_form::WidgetBookingForm;
pub use bookings_table::WidgetBookingsTable;
pub use notice::{NoticeResponse, WidgetNotice};
