//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `ruleset_core::defaults`.

use ruleset_core::defaults;

/// Generate default value functions that forward to ruleset_core::defaults constants.
macro_rules! default_fns {
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

default_fns! {
    default_rule_set_version => DEFAULT_RULE_SET_VERSION: u8,
}
