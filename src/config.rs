pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "profile-explorer";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to GitHub and laying out the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub api_base: String,
    pub user_agent: String,
    /// Repositories per dashboard page.
    pub page_size: usize,
    /// Repositories requested from GitHub in the single list call.
    pub per_page: u32,
    pub timeout_secs: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            api_base: DEFAULT_API_BASE.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            page_size: DEFAULT_PAGE_SIZE,
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
