use shared::{animation::{COUNTER_DURATION_MS, COUNTER_STEPS}, STORAGE_KEY};

pub struct Config {
    pub storage_key: &'static str,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub chart_fill_delay_ms: u32,
    pub log_level: log::Level,
    pub reset_prompt: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_steps: COUNTER_STEPS,
            chart_fill_delay_ms: 16,
            log_level: log::Level::Info,
            reset_prompt: "Reset all saved votes on this browser?",
        }
    }
}

pub const CONFIG: Config = Config::new();
