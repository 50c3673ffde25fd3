use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    /// Identifier of the spreadsheet backing attendance/leave/audit
    /// endpoints. Kept optional: existing clients expect a 500 from the
    /// gated endpoints when it is unset, not a startup crash.
    pub spreadsheet_id: Option<String>,

    pub sheets_api_base: String,
    pub firestore_api_base: String,
    pub firebase_project_id: String,
    pub google_api_key: String,

    // Rate limiting
    pub rate_api_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            spreadsheet_id: env::var("ATTENDANCE_SPREADSHEET_ID")
                .ok()
                .filter(|id| !id.is_empty()),

            sheets_api_base: env::var("SHEETS_API_BASE")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string()),
            firestore_api_base: env::var("FIRESTORE_API_BASE")
                .unwrap_or_else(|_| "https://firestore.googleapis.com/v1".to_string()),
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .expect("FIREBASE_PROJECT_ID must be set"),
            google_api_key: env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set"),

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),
        }
    }
}
