//! Typed interpretation of raw switch values.
//!
//! Parsing returns `Option`; the store folds `None` into the caller's
//! default and logs the corrupt value.

/// A type a raw switch value can be read as.
pub trait FromSwitch: Sized {
    /// Name used in corrupt-value diagnostics and metrics labels.
    const KIND: &'static str;

    fn from_switch(raw: &str) -> Option<Self>;
}

impl FromSwitch for bool {
    const KIND: &'static str = "bool";

    fn from_switch(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

macro_rules! impl_from_switch_int {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FromSwitch for $ty {
                const KIND: &'static str = $kind;

                fn from_switch(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )*
    };
}

impl_from_switch_int!(i32 => "i32", i64 => "i64", u32 => "u32", u64 => "u64");
