pub const APP_NAME: &str = "ronin";

pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_DURATION_SECS: u32 = 10;

// Below this the scene degenerates into noise; the player clamps to it.
pub const MIN_COLUMNS: u16 = 40;
pub const MIN_ROWS: u16 = 20;

pub const FALLBACK_COLUMNS: u16 = 120;
pub const FALLBACK_ROWS: u16 = 40;
