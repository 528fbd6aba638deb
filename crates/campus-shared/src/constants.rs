//! Application-wide constants

pub const SERVICE_NAME: &str = "backend";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SSL_MODE: &str = "required";

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 3000;

pub const DEFAULT_HOST_KEY: &str = "/backend/db/host";
pub const DEFAULT_USER_KEY: &str = "/backend/db/user";
pub const DEFAULT_PASSWORD_KEY: &str = "/backend/db/password";
pub const DEFAULT_NAME_KEY: &str = "/backend/db/name";
