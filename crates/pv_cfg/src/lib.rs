//! Compilation-control macros shared by the workspace.
//!
//! The only entry point is [`define_alias!`], which turns a `#[cfg(...)]`
//! predicate into a named macro so downstream code can gate statements or
//! items without repeating the predicate everywhere:
//!
//! ```
//! pub mod cfg {
//!     pv_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!     }
//! }
//!
//! fn check(len: usize) {
//!     cfg::debug! { assert!(len < isize::MAX as usize); }
//! }
//! # check(4);
//! ```
//!
//! The generated macro also supports an `if { ... } else { ... }` form that
//! expands the matching branch only, for items that need a counterpart when
//! the predicate is off:
//!
//! ```
//! # pub mod cfg {
//! #     pv_cfg::define_alias! { #[cfg(debug_assertions)] => debug, }
//! # }
//! cfg::debug! {
//!     if { fn profile() -> &'static str { "debug" } }
//!     else { fn profile() -> &'static str { "release" } }
//! }
//! # let _ = profile();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

/// Defines one alias macro per `#[cfg(...)] => name` pair.
///
/// Each alias is `pub use`d from the module it was defined in, so the
/// conventional wrapper is a `pub mod cfg { ... }` at the crate root.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($($cfg:tt)*)] => $alias:ident),* $(,)?) => {
        $(
            $crate::__define_alias! { ($) #[cfg($($cfg)*)] => $alias }
        )*
    };
}

// The `($)` argument smuggles a literal dollar token into the nested
// `macro_rules!` definitions.
#[doc(hidden)]
#[macro_export]
macro_rules! __define_alias {
    (($d:tt) #[cfg($($cfg:tt)*)] => $alias:ident) => {
        #[cfg($($cfg)*)]
        macro_rules! $alias {
            (if { $d($d pos:tt)* } else { $d($d neg:tt)* }) => { $d($d pos)* };
            ($d($d tokens:tt)*) => { $d($d tokens)* };
        }

        #[cfg(not($($cfg)*))]
        macro_rules! $alias {
            (if { $d($d pos:tt)* } else { $d($d neg:tt)* }) => { $d($d neg)* };
            ($d($d tokens:tt)*) => {};
        }

        pub(crate) use $alias;
    };
}

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(all())] => always,
            #[cfg(any())] => never,
        }
    }

    #[test]
    fn plain_form() {
        let mut hits = 0;
        cfg::always! { hits += 1; }
        cfg::never! { hits += 10; }
        assert_eq!(hits, 1);
    }

    #[test]
    fn if_else_form() {
        cfg::always! {
            if { const ON: bool = true; }
            else { const ON: bool = false; }
        }
        cfg::never! {
            if { const OFF: bool = false; }
            else { const OFF: bool = true; }
        }
        assert!(ON);
        assert!(OFF);
    }
}
