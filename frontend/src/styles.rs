pub const CONTAINER: &str = "container mx-auto px-6 py-10 max-w-4xl";
pub const SECTION: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 mb-8";

pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 p-4 rounded-lg shadow-sm";
pub const ALERT_CARD: &str = "p-3 rounded-lg shadow-md mt-4";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";
pub const INPUT_GROUP: &str = "flex-1 flex flex-col gap-2";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";
pub const BUTTON_LINK: &str = "text-sm text-blue-400 hover:underline mt-2";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const GRID_FACTS: &str = "grid grid-cols-2 md:grid-cols-4 gap-4";
pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const BAR_TRACK: &str = "h-4 w-full bg-gray-700 rounded-full overflow-hidden";
pub const BAR_FILL: &str = "h-full bg-blue-500 rounded-full transition-all duration-700 ease-out";

pub const TABLE_CELL: &str = "px-2 py-1 border-b border-gray-600 text-left text-white";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}

pub fn button_danger() -> String {
    combine_classes(BUTTON_BASE, BUTTON_DANGER)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white"),
    }
}
