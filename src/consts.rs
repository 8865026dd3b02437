pub const SESSION_COOKIE: &str = "fp_session";

pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 120;

pub(crate) const PLAN_MAX_TOKENS: i32 = 4096;
pub(crate) const ANSWER_MAX_TOKENS: i32 = 1024;

// Widget-level ranges from the form, enforced again server-side.
pub const WEIGHT_MIN_KG: f64 = 30.0;
pub const WEIGHT_MAX_KG: f64 = 200.0;
pub const AGE_MIN: u32 = 10;
pub const AGE_MAX: u32 = 100;
pub const WEEKS_MIN: u32 = 1;
pub const WEEKS_MAX: u32 = 12;
