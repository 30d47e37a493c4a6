use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub logs_dir: String,
    pub employees_file: String,

    // Rate limiting
    pub rate_idm_per_min: u32,
    pub rate_mode_per_min: u32,
    pub rate_poll_per_min: u32,
    pub rate_status_per_min: u32,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string()),
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "attendance_logs".to_string()),
            employees_file: env::var("EMPLOYEES_FILE")
                .unwrap_or_else(|_| "employees.json".to_string()),

            rate_idm_per_min: env::var("RATE_IDM_PER_MIN")
                .unwrap_or_else(|_| "120".to_string()) // one scan every 500ms is plenty
                .parse()
                .unwrap(),
            rate_mode_per_min: env::var("RATE_MODE_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_poll_per_min: env::var("RATE_POLL_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_status_per_min: env::var("RATE_STATUS_PER_MIN")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
