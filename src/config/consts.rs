// src/config/consts.rs

// Files (relative to the working directory)
pub const DATA_FILE: &str = "animals_data.json";
pub const TEMPLATE_FILE: &str = "animals_template.html";
pub const OUTPUT_FILE: &str = "animals.html";

// Template markers
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
pub const HEADING_ANCHOR: &str = "<h1>My Animal Repository</h1>";

// Grouping
pub const GROUP_KEY: &str = "skin_type";
pub const UNKNOWN_LABEL: &str = "Unknown";

// Remote API
pub const API_URL: &str = "https://api.api-ninjas.com/v1/animals";
pub const API_KEY_ENV: &str = "API_KEY";
pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
