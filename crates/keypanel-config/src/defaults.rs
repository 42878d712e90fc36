//! Default configuration values and serde default functions.

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8787";
pub const DEFAULT_TRIAL_DAYS: i64 = 7;
pub const DEFAULT_SQL_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SQL_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Generate default value functions forwarding to the constants above.
macro_rules! default_fns {
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                $const_name
            }
        )*
    };
}

macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                $const_name.to_string()
            }
        )*
    };
}

default_fns! {
    default_trial_days               => DEFAULT_TRIAL_DAYS: i64,
    default_sql_max_connections      => DEFAULT_SQL_MAX_CONNECTIONS: u32,
    default_sql_connect_timeout_secs => DEFAULT_SQL_CONNECT_TIMEOUT_SECS: u64,
}

default_string_fns! {
    default_listen => DEFAULT_LISTEN,
}
