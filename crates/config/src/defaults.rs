// Defaults for configuration fields

pub(crate) const DEFAULT_ENABLED: bool = true;
pub(crate) const THRESHOLD_WHEEL_MS: u64 = 350;
pub(crate) const THRESHOLD_CLICK_MS: u64 = 0;

// Serde default functions
pub(crate) const fn default_enabled() -> bool {
    DEFAULT_ENABLED
}
pub(crate) const fn default_threshold_wheel_ms() -> u64 {
    THRESHOLD_WHEEL_MS
}
pub(crate) const fn default_threshold_click_ms() -> u64 {
    THRESHOLD_CLICK_MS
}
