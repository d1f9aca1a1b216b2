//! Centralized defaults for the admin client workspace.
//!
//! These values mirror the factory configuration of the admin console so a
//! client pointed at an out-of-the-box server works with nothing but a host.

/// Default admin console port.
pub const DEFAULT_ADMIN_PORT: u16 = 1111;

/// Default administrator username.
pub const DEFAULT_USERNAME: &str = "fms";

/// Default administrator password.
pub const DEFAULT_PASSWORD: &str = "fms";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Path prefix for all admin actions.
pub const ADMIN_PATH: &str = "/admin";
