//! Thin tracing facade over the `log` crate.
//!
//! This crate never installs a logger itself (matching the dummy/no-op
//! logger the original C library ships by default): callers who want output
//! install `env_logger` or any other `log` backend. What we add on top is a
//! depth-indexed scope guard, so nested calls (schema registration inside a
//! driver state inside a parse) read as a call tree rather than a flat log.

use std::cell::Cell;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// RAII guard that logs entry/exit of a function at `log::Level::Trace`,
/// indented by the current call depth.
pub struct FunctionScope {
    name: &'static str,
}

impl FunctionScope {
    pub fn enter(name: &'static str) -> Self {
        let depth = DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });
        log::trace!(target: "argparse", "{}-> {name}", "  ".repeat(depth));
        Self { name }
    }
}

impl Drop for FunctionScope {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
        let depth = DEPTH.with(Cell::get);
        log::trace!(target: "argparse", "{}<- {}", "  ".repeat(depth), self.name);
    }
}

/// Opens a [`FunctionScope`] for the remainder of the enclosing block, named
/// after the call site function.
macro_rules! scope {
    () => {
        let _scope = $crate::logging::FunctionScope::enter(
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                // Strip the trailing "::f" left by `type_name_of`.
                &name[..name.len() - 3]
            }
        );
    };
}

pub(crate) use scope;
