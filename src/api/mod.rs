pub mod attendance;
pub mod audit;
pub mod leave;
pub mod notification;
pub mod tracking;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::config::Config;

    /// Config for handler tests; `spreadsheet` drives the configuration
    /// gate on Sheets-backed endpoints.
    pub fn test_config(spreadsheet: Option<&str>) -> Config {
        Config {
            server_addr: "127.0.0.1:0".to_string(),
            api_prefix: "/api".to_string(),
            spreadsheet_id: spreadsheet.map(str::to_string),
            sheets_api_base: "http://localhost".to_string(),
            firestore_api_base: "http://localhost".to_string(),
            firebase_project_id: "test-project".to_string(),
            google_api_key: "test-key".to_string(),
            rate_api_per_min: 1000,
        }
    }
}
