// src/config/consts.rs

// Portal
pub const BASE_URL: &str = "https://anmeldung.freestyledm2019.de";
pub const SIGN_IN_PATH: &str = "/users/sign_in";
pub const ROSTER_PATH: &str = "/registrants/manage_all";
pub const RESULTS_PATH: &str = "/results";
pub const LODGING_PATH: &str = "/en/payment_summary/lodgings/1";

// Net
pub const USER_AGENT: &str = concat!("reg_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Selectors
pub const SEL_TABLE_ROWS: &str = "tbody tr";
pub const SEL_COMPETITION_LINKS: &str = "tbody tr td:nth-child(3) a";
pub const SEL_COMPETITION_TITLE: &str = "#main h2";
pub const SEL_LODGING_ROWS: &str = "table tbody tr";

// Sign-in form field names
pub const FIELD_EMAIL: &str = "user[email]";
pub const FIELD_PASSWORD: &str = "user[password]";

// Lodging label markers
pub const FIRST_NIGHT_MARKER: &str = "Nov 15,";
pub const SECOND_NIGHT_MARKER: &str = "Nov 17,";

// Concurrency
pub const WORKERS: usize = 4;
pub const UPDATE_CHANNEL_CAPACITY: usize = 256;

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const JSON_FILE: &str = "result.json";
pub const CSV_FILE: &str = "result.csv";
pub const CSV_SEP: char = ',';
