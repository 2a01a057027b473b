use super::{
    record::{GateDate, Record},
    status::completion_percent,
};
use crate::constants::{DISPLAY_DATE_FORMAT, MISSING_DISPLAY_VALUE};

/// On-card gate date: `DD-MM-YYYY`, `N/A` when absent, the stored text when it
/// cannot be read as a date. Used for display only.
pub fn format_gate_date(gate_date: Option<&GateDate>) -> String {
    match gate_date {
        None => MISSING_DISPLAY_VALUE.to_string(),
        Some(gate_date) => match gate_date.date() {
            Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            None => gate_date.raw().to_string(),
        },
    }
}

/// Labelled values shown on an option card, in display order.
pub fn card_fields(record: &Record) -> Vec<(&'static str, String)> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        ("Product Type", text(&record.product_type)),
        ("Style Number", text(&record.style_number)),
        ("Colour", text(&record.colour)),
        ("Order Qty", text(&record.order_qty)),
        ("Store Launch Week", text(&record.store_launch_week)),
        ("Gate Entry Date", format_gate_date(record.gate_date.as_ref())),
        ("Current Status", text(&record.current_status)),
    ]
}

pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = width * usize::from(percent) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

pub fn record_progress_bar(record: &Record, width: usize) -> String {
    progress_bar(completion_percent(record.current_status.as_deref()), width)
}
