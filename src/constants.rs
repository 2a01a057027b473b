pub const DEFAULT_PAGE_SIZE: usize = 52;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d1/Image_not_available.png/800px-Image_not_available.png";

pub const EXPORT_FILENAME: &str = "GateIn_Options.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

pub const EXPORT_HEADERS: [&str; 9] = [
    "Product Reference",
    "Image URL",
    "Style Number",
    "Colour",
    "Product Type",
    "Order Qty",
    "Store Launch Week",
    "Gate Entry Date",
    "Current Status",
];

pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";
pub const MISSING_DISPLAY_VALUE: &str = "N/A";

pub const PROGRESS_BAR_WIDTH: usize = 20;
