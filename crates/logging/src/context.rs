//! crates/logging/src/context.rs
//! Call-site context prefixed to messages emitted through the macros.

use std::fmt;

use crate::config::ContextOptions;

/// Source location of a log call, rendered according to [`ContextOptions`].
///
/// Rendering follows the layout `function: in [file] (l. N) `, dropping the
/// pieces that are disabled. With every piece disabled nothing is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
    options: ContextOptions,
}

impl CallSite {
    /// Creates a call site rendered with the feature-selected [`CONTEXT`](crate::config::CONTEXT).
    #[must_use]
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self::with_options(function, file, line, crate::config::CONTEXT)
    }

    /// Creates a call site rendered with explicit options.
    #[must_use]
    pub const fn with_options(
        function: &'static str,
        file: &'static str,
        line: u32,
        options: ContextOptions,
    ) -> Self {
        Self {
            function,
            file,
            line,
            options,
        }
    }

    /// Name of the enclosing function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source file of the call.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ContextOptions {
            function,
            file,
            line,
        } = self.options;

        if function {
            write!(f, "{}:", self.function)?;
        }
        if file {
            write!(f, " in [{}]", self.file)?;
        }
        if line {
            write!(f, " (l. {})", self.line)?;
        }
        if function || file || line {
            f.write_str(" ")?;
        }
        Ok(())
    }
}

/// Strips the helper suffix and closure segments from a `type_name` path,
/// leaving the bare name of the enclosing function.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__tinylog_here").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

/// Expands to the name of the enclosing function as a `&'static str`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __tinylog_here() {}
        fn __tinylog_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::context::enclosing_function(__tinylog_type_name(__tinylog_here))
    }};
}

/// Expands to a [`CallSite`] describing the macro's location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::context::CallSite::new($crate::function_name!(), file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(options: ContextOptions) -> CallSite {
        CallSite::with_options("load", "src/main.rs", 42, options)
    }

    #[test]
    fn renders_every_combination() {
        let cases = [
            ((true, true, true), "load: in [src/main.rs] (l. 42) "),
            ((true, true, false), "load: in [src/main.rs] "),
            ((true, false, true), "load: (l. 42) "),
            ((true, false, false), "load: "),
            ((false, true, true), " in [src/main.rs] (l. 42) "),
            ((false, true, false), " in [src/main.rs] "),
            ((false, false, true), " (l. 42) "),
            ((false, false, false), ""),
        ];

        for ((function, file, line), expected) in cases {
            let options = ContextOptions {
                function,
                file,
                line,
            };
            assert_eq!(site(options).to_string(), expected, "{options:?}");
        }
    }

    #[test]
    fn function_name_reports_enclosing_function() {
        assert_eq!(crate::function_name!(), "function_name_reports_enclosing_function");
    }

    #[test]
    fn function_name_skips_closures() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "function_name_skips_closures");
    }

    #[test]
    fn call_site_captures_file_and_line() {
        let site = crate::call_site!();
        assert!(site.file().ends_with("context.rs"));
        assert!(site.line() > 0);
        assert_eq!(site.function(), "call_site_captures_file_and_line");
    }
}
