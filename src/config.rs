/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (5 minutes = 300,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 300_000;

    /// Fall back to synthesized readings when the sensor API is unreachable
    pub const SYNTHETIC_FALLBACK: bool = true;

    /// Seed for the synthetic reading generator
    pub const SYNTH_SEED: u64 = 0x00E1_75EE_D000_0001;

    /// Debounce delay for chart re-renders on window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
