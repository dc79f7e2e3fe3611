//! Application constants for the facility directory
//!
//! Column header literals of the published spreadsheet, display defaults
//! used by the facility view, and fetch/config defaults.

// =============================================================================
// Fetch Defaults
// =============================================================================

/// Maximum number of attempts per fetch
pub const DEFAULT_RETRIES: u32 = 5;

/// Delay before the first retry; doubles after every failed attempt
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("afterschool-directory/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Configuration Locations
// =============================================================================

/// Directory under the platform config dir that holds `config.json`
pub const CONFIG_DIR_NAME: &str = "afterschool-directory";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log filter target
pub const LOG_TARGET: &str = "afterschool_directory";

// =============================================================================
// Spreadsheet Columns
// =============================================================================

/// Header literals of the facility sheet
pub mod columns {
    /// Facility name
    pub const NAME: &str = "事業所名";
    /// Street address
    pub const ADDRESS: &str = "住所";
    pub const PHONE: &str = "電話番号";
    /// Opening time, e.g. `10:00`
    pub const HOURS_OPEN: &str = "開所時間";
    /// Closing time, e.g. `18:00`
    pub const HOURS_CLOSED: &str = "閉所時間";
    pub const OPEN_DAYS: &str = "開所日";
    pub const CLOSED_DAYS: &str = "閉所日";
    /// Schools the children commute from, separated by `・`, `、` or `,`
    pub const SCHOOLS: &str = "主な通学先";
    pub const TRANSPORT: &str = "送迎";
    pub const MEALS: &str = "食事";
    /// Free-text appeal message
    pub const APPEAL: &str = "アピールポイント";
    pub const PHOTO_MAIN: &str = "pic1";
    pub const PHOTO_EXTRA: [&str; 2] = ["pic2", "pic3"];
}

// =============================================================================
// Display Defaults
// =============================================================================

pub mod defaults {
    /// Shown when a facility has no `pic1`
    pub const PLACEHOLDER_PHOTO: &str =
        "https://images.unsplash.com/photo-1594608661623-aa0bd3a69d98?w=800";
    pub const TIME: &str = "00:00";
    pub const OPEN_DAYS: &str = "月〜金";
    /// Service column left blank
    pub const UNCONFIRMED: &str = "要確認";
    /// Phone or school list left blank
    pub const NOT_REGISTERED: &str = "登録なし";
    /// Marker meaning a service is offered
    pub const AVAILABLE_MARKER: char = '有';
    pub const SCHOOL_SEPARATORS: [char; 3] = ['・', '、', ','];
}

/// Base URL for map searches
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
