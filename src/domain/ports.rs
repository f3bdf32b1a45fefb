use std::collections::HashMap;

/// Configuration seam between the client and whichever config source is in
/// use (TOML file, CLI flags).
pub trait ApiConfig: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> HashMap<String, String>;
    fn retry_attempts(&self) -> u32;
    fn retry_delay_seconds(&self) -> u64;
}
