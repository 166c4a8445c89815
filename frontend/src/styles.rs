use shared::SlotStatus;

pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-50";
pub const CONTAINER: &str = "max-w-7xl mx-auto px-6 py-8";
pub const CONTAINER_SM: &str = "max-w-md w-full mx-auto px-6 py-20";

pub const CARD: &str = "bg-white rounded-2xl shadow-sm p-8";
pub const CARD_SECTION: &str = "border border-gray-200 rounded-xl p-6 hover:border-blue-300 transition-colors";
pub const STAT_TILE: &str = "bg-white rounded-lg p-4";
pub const ALERT_CARD: &str = "p-4 rounded-lg mb-6 text-sm";

pub const INPUT_BASE: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors";
pub const INPUT_NUMBER: &str = "w-32 px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-6 py-2 rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-700 hover:bg-blue-800 text-white";
pub const BUTTON_SECONDARY: &str = "border border-gray-300 text-gray-700 hover:bg-gray-50";
pub const BUTTON_SUCCESS: &str = "bg-green-100 text-green-700 hover:bg-green-200";
pub const BUTTON_ORANGE: &str = "bg-orange-500 hover:bg-orange-600 text-white";

pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700 mb-2";
pub const TEXT_MUTED: &str = "text-sm text-gray-600";
pub const HEADING_LG: &str = "text-3xl font-bold text-gray-900 mb-2";
pub const HEADING_MD: &str = "text-2xl font-bold text-gray-900 mb-6";
pub const HEADING_SM: &str = "text-lg font-semibold text-gray-900";

pub const TABLE_HEAD: &str = "px-6 py-4 text-center text-xs font-medium text-gray-500 uppercase tracking-wider min-w-[120px]";
pub const TABLE_CELL_BADGE: &str = "px-3 py-2 text-sm font-semibold inline-block min-w-[80px] rounded";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}

pub fn button_secondary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_SECONDARY)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-50 border border-red-200 text-red-800"),
        "success" => combine_classes(ALERT_CARD, "bg-green-50 border border-green-200 text-green-800"),
        _ => combine_classes(ALERT_CARD, "bg-blue-50 border border-blue-200 text-blue-800"),
    }
}

/// Colored table cell for a booth/slot status.
pub fn status_cell(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Received => "bg-emerald-100 text-emerald-900",
        SlotStatus::Pending => "bg-amber-100 text-amber-900",
        SlotStatus::Overdue => "bg-red-100 text-red-900 animate-pulse",
        SlotStatus::Future => "bg-gray-100 text-gray-500",
    }
}

pub fn status_pill(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Received => "bg-green-100 text-green-800",
        SlotStatus::Pending => "bg-yellow-100 text-yellow-800",
        SlotStatus::Overdue => "bg-red-100 text-red-800",
        SlotStatus::Future => "bg-gray-100 text-gray-800",
    }
}

pub fn status_swatch(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Received => "w-4 h-4 bg-emerald-500 rounded",
        SlotStatus::Pending => "w-4 h-4 bg-amber-400 rounded",
        SlotStatus::Overdue => "w-4 h-4 bg-red-500 rounded animate-pulse",
        SlotStatus::Future => "w-4 h-4 bg-gray-300 rounded",
    }
}
