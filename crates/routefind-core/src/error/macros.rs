//! Error macros for routefind

/// Macro for returning a malformed-input error at a given line
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::RouteError::malformed($line, format!($($arg)+)))
    };
}
