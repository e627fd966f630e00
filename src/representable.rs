use url::Url;

/// Conversion contract between a typed value and its query-string form.
///
/// Implemented for `String`, the primitive integers, `bool`, and
/// [`url::Url`]. Parsing returns `None` on malformed input instead of
/// failing loudly; `bool` is the one type whose parse is total (see below).
pub trait QueryRepresentable: Sized {
    /// Parse a value from a raw (already percent-decoded) query value.
    fn from_query_value(value: &str) -> Option<Self>;

    /// The string stored for this value in a query item.
    fn to_query_value(&self) -> String;
}

impl QueryRepresentable for String {
    fn from_query_value(value: &str) -> Option<Self> {
        Some(value.to_owned())
    }

    fn to_query_value(&self) -> String {
        self.clone()
    }
}

macro_rules! integer_query_representable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl QueryRepresentable for $ty {
                fn from_query_value(value: &str) -> Option<Self> {
                    value.parse().ok()
                }

                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

integer_query_representable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Booleans parse totally: `"1"` and `"true"` are `true`, every other
/// value is `false`. A missing item is therefore the only way to observe
/// `None` through a bool-typed key.
impl QueryRepresentable for bool {
    fn from_query_value(value: &str) -> Option<Self> {
        Some(value == "1" || value == "true")
    }

    fn to_query_value(&self) -> String {
        String::from(if *self { "1" } else { "0" })
    }
}

impl QueryRepresentable for Url {
    fn from_query_value(value: &str) -> Option<Self> {
        Url::parse(value).ok()
    }

    fn to_query_value(&self) -> String {
        self.as_str().to_owned()
    }
}
