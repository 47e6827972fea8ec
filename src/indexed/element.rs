use std::fmt::Debug;

/// Position within a vector, or a row or column within a matrix.
pub type Index = i32;

/// The five value kinds a view or container can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Bool,
    Int,
    Long,
    Double,
    Object,
}

impl Kind {
    /// Prefix used when naming containers, as in `DoubleVector:3`.
    pub fn type_prefix(&self) -> &'static str {
        use Kind::*;
        match self {
            Bool => "Bool",
            Int => "Int",
            Long => "Long",
            Double => "Double",
            Object => "Obj",
        }
    }

    /// Whether values of this kind can be widened into `other`.
    pub fn widens_to(&self, other: Kind) -> bool {
        use Kind::*;
        matches!(
            (self, other),
            (Int, Int | Long | Double) | (Long, Long | Double) | (Double, Double)
        ) || self == &other
    }
}

/// Value Equality and Hashing
///
/// Containers compare and hash their elements through this trait rather than
/// through `PartialEq` and `std::hash::Hash`, so that floating point values
/// can treat every NaN as equal while still telling `0.0` apart from `-0.0`,
/// and so that element hashes stay stable 32 bit integers.
///
pub trait Value: Clone + Debug + Send + Sync + 'static {
    fn value_eq(&self, other: &Self) -> bool;
    fn value_hash(&self) -> i32;
}

/// A value that may populate a view or container.
pub trait Element: Value {
    const KIND: Kind;

    /// Value read from any position outside of a container's bounds.
    fn absent() -> Self;
}

impl Value for bool {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl Value for i32 {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        *self
    }
}

impl Value for i64 {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        (*self ^ ((*self as u64) >> 32) as i64) as i32
    }
}

impl Value for f64 {
    fn value_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits() || (self.is_nan() && other.is_nan())
    }

    fn value_hash(&self) -> i32 {
        // every NaN hashes like the canonical quiet NaN
        let bits = if self.is_nan() {
            0x7ff8_0000_0000_0000_u64
        } else {
            self.to_bits()
        };
        (bits ^ (bits >> 32)) as i32
    }
}

impl Value for char {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        *self as i32
    }
}

impl Value for String {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        utf16_hash(self)
    }
}

impl Value for &'static str {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> i32 {
        utf16_hash(self)
    }
}

fn utf16_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

impl<V: Value> Value for Option<V> {
    fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.value_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn value_hash(&self) -> i32 {
        self.as_ref().map_or(0, Value::value_hash)
    }
}

impl Element for bool {
    const KIND: Kind = Kind::Bool;
    fn absent() -> Self {
        false
    }
}

impl Element for i32 {
    const KIND: Kind = Kind::Int;
    fn absent() -> Self {
        0
    }
}

impl Element for i64 {
    const KIND: Kind = Kind::Long;
    fn absent() -> Self {
        0
    }
}

impl Element for f64 {
    const KIND: Kind = Kind::Double;
    fn absent() -> Self {
        f64::NAN
    }
}

impl<V: Value> Element for Option<V> {
    const KIND: Kind = Kind::Object;
    fn absent() -> Self {
        None
    }
}

/// Converts a collection length into an [`Index`].
///
/// # Panics
///
/// If `len` exceeds `Index::MAX`. Containers are addressed by 32 bit indices.
///
pub(crate) fn index_len(len: usize) -> Index {
    Index::try_from(len).unwrap_or_else(|_| {
        panic!(
            "length {len} exceeds the maximum container length {}",
            Index::MAX
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn nan_values_are_equal() {
        assert!(f64::NAN.value_eq(&f64::NAN));
        assert!(f64::NAN.value_eq(&-f64::NAN));
        assert!(!0.0_f64.value_eq(&-0.0));
        assert!(1.5_f64.value_eq(&1.5));
    }

    #[test]
    fn nan_payloads_hash_alike() {
        let other_nan = f64::from_bits(0x7ff0_0000_0000_0001);
        assert!(other_nan.is_nan());
        assert_eq!(other_nan.value_hash(), f64::NAN.value_hash());
        assert_eq!(f64::NAN.value_hash(), 0x7ff8_0000);
        assert_eq!(1.0_f64.value_hash(), 1072693248);
        assert_eq!(0.0_f64.value_hash(), 0);
    }

    #[test]
    fn scalar_hashes() {
        assert_eq!(true.value_hash(), 1231);
        assert_eq!(false.value_hash(), 1237);
        assert_eq!((-7_i32).value_hash(), -7);
        assert_eq!(1_i64.value_hash(), 1);
        assert_eq!((-1_i64).value_hash(), 0);
        assert_eq!((1_i64 << 32).value_hash(), 1);
        assert_eq!('a'.value_hash(), 97);
    }

    #[test]
    fn string_hash_is_polynomial() {
        assert_eq!("".value_hash(), 0);
        assert_eq!("a".value_hash(), 97);
        assert_eq!("ab".value_hash(), 97 * 31 + 98);
        assert_eq!(String::from("hello").value_hash(), 99162322);
    }

    #[test]
    fn missing_objects() {
        let none: Option<String> = None;
        assert_eq!(none.value_hash(), 0);
        assert!(none.value_eq(&None));
        assert!(!none.value_eq(&Some(String::new())));
        assert_eq!(<Option<String>>::absent(), None);
    }

    #[test]
    fn absent_values_per_kind() {
        assert!(!bool::absent());
        assert_eq!(i32::absent(), 0);
        assert_eq!(i64::absent(), 0);
        assert!(f64::absent().is_nan());
    }

    #[test]
    fn kinds_parse_and_display() {
        assert_eq!(Kind::from_str("double"), Ok(Kind::Double));
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Kind::Object.type_prefix(), "Obj");
        assert!(Kind::Int.widens_to(Kind::Double));
        assert!(!Kind::Double.widens_to(Kind::Long));
        assert!(!Kind::Bool.widens_to(Kind::Int));
    }
}
