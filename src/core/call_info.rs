//! Caller provenance attached to each log line
//!
//! Rust has no runtime stack introspection worth relying on, so provenance is
//! captured at the call site: the logging macros expand `module_path!()`,
//! `file!()`, `line!()` and the enclosing function's path.

use std::path::Path;

/// Placeholder used when the calling function cannot be determined.
pub const UNKNOWN_FUNCTION: &str = "?";

/// Where a log call came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfo {
    pub pkg_name: String,
    pub file_name: String,
    pub func_name: String,
    pub line: u32,
}

impl CallInfo {
    /// Build provenance from a fully qualified function path as produced by
    /// `std::any::type_name`, e.g. `app::net::Server::start::{{closure}}`.
    ///
    /// The package is the innermost module of `module_path`, so an impl type
    /// sitting between the module and the method never leaks into it.
    pub fn from_function_path(function_path: &str, module_path: &str, file: &str, line: u32) -> Self {
        Self {
            pkg_name: last_segment(module_path).to_string(),
            file_name: short_file_name(file).to_string(),
            func_name: innermost_function(function_path).to_string(),
            line,
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Strip the `__marker` helper, closure frames and generic arguments, then
/// keep the last path segment.
fn innermost_function(function_path: &str) -> &str {
    let mut path = function_path
        .strip_suffix("::__marker")
        .unwrap_or(function_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    let name = last_segment(path);
    let name = name.split('<').next().unwrap_or(name);
    if name.is_empty() {
        UNKNOWN_FUNCTION
    } else {
        name
    }
}

fn short_file_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Expands to the fully qualified path of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        type_name_of(__marker)
    }};
}

/// Capture a [`CallInfo`] for the current call site.
#[macro_export]
macro_rules! call_info {
    () => {
        $crate::core::CallInfo::from_function_path(
            $crate::__function_path!(),
            ::std::module_path!(),
            ::std::file!(),
            ::std::line!(),
        )
    };
}
