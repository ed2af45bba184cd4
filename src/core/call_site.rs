//! Caller location attached to prefixed records
//!
//! Locations are captured at compile time by the logging macros: `line!()`
//! for the line and a nested probe function whose `type_name` reveals the
//! enclosing function path (see [`function_name!`](crate::function_name)).
//! Calls made through the plain methods carry no location and render as
//! `UnknownFunction`.

use std::fmt;

pub const UNKNOWN_FUNCTION: &str = "UnknownFunction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Build a call site from a fully qualified path such as
    /// `my_app::server::handle::{{closure}}`; only `handle` is kept.
    pub fn new(qualified_function: &'static str, line: u32) -> Self {
        Self {
            function: short_function_name(qualified_function),
            line,
        }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.line)
    }
}

/// Strip module qualification and closure markers from a function path
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    let short = path.rsplit("::").next().unwrap_or(path);
    if short.is_empty() {
        UNKNOWN_FUNCTION
    } else {
        short
    }
}
