//! The seam between Rust values and column extraction
//!
//! [`Reflect`] replaces runtime type introspection: scalar types report their
//! bound [`Value`], record types (normally via `#[derive(Record)]`) report their
//! [`Schema`] and one [`Reflected`] entry per declared field.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::schema::Schema;
use crate::Value;

/// What a value looks like to the extractor
#[derive(Debug, Clone, PartialEq)]
pub enum Reflected {
    /// A bindable scalar
    Scalar(Value),
    /// A structured record, one entry per declared field
    Struct {
        schema: Schema,
        fields: Vec<Reflected>,
    },
    /// A field that was never inspected (tagged `skip`)
    Opaque,
}

impl Reflected {
    pub fn is_struct(&self) -> bool {
        matches!(self, Reflected::Struct { .. })
    }
}

/// Types that can be described to the field extractor.
///
/// Record implementations return `Some` from [`Reflect::schema`] and a
/// [`Reflected::Struct`] carrying that same schema and exactly one entry per
/// schema field, in the same order.
pub trait Reflect {
    /// Field layout of the type, `None` unless the type is a record
    fn schema() -> Option<Schema>
    where
        Self: Sized,
    {
        None
    }

    /// Describe this value
    fn reflect(&self) -> Reflected;
}

/// Scalars that bind as elements of a [`Value::Array`].
///
/// `Vec<T>` and `[T]` reflect as arrays when `T` implements this. `u8` is left
/// out so that `Vec<u8>` keeps binding as `BYTEA`.
pub trait ArrayElement: Reflect {}

macro_rules! impl_scalar_reflect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Reflected {
                    Reflected::Scalar(Value::from(self.clone()))
                }
            }
        )*
    };
}

macro_rules! impl_array_element {
    ($($ty:ty),* $(,)?) => {
        $(impl ArrayElement for $ty {})*
    };
}

impl_scalar_reflect!(
    bool,
    i8,
    u8,
    i16,
    u16,
    i32,
    u32,
    i64,
    u64,
    isize,
    usize,
    f32,
    f64,
    String,
    Vec<u8>,
    serde_json::Value,
    DateTime<Utc>,
    NaiveDateTime,
    Value,
);

impl_array_element!(
    bool,
    i8,
    i16,
    u16,
    i32,
    u32,
    i64,
    u64,
    isize,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
    DateTime<Utc>,
    NaiveDateTime,
    Value,
);

#[cfg(feature = "uuid-support")]
impl_scalar_reflect!(uuid::Uuid);
#[cfg(feature = "uuid-support")]
impl_array_element!(uuid::Uuid);

#[cfg(feature = "decimal-support")]
impl_scalar_reflect!(rust_decimal::Decimal);
#[cfg(feature = "decimal-support")]
impl_array_element!(rust_decimal::Decimal);

impl Reflect for str {
    fn reflect(&self) -> Reflected {
        Reflected::Scalar(Value::from(self))
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Reflected {
        (**self).reflect()
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn schema() -> Option<Schema> {
        T::schema()
    }

    fn reflect(&self) -> Reflected {
        (**self).reflect()
    }
}

impl ArrayElement for str {}

impl<T: ArrayElement + ?Sized> ArrayElement for &T {}

impl<T: ArrayElement> ArrayElement for Option<T> {}

impl<T: ArrayElement> Reflect for [T] {
    fn reflect(&self) -> Reflected {
        Reflected::Scalar(Value::Array(self.iter().map(element_value).collect()))
    }
}

impl<T: ArrayElement> Reflect for Vec<T> {
    fn reflect(&self) -> Reflected {
        self.as_slice().reflect()
    }
}

fn element_value<T: ArrayElement + ?Sized>(element: &T) -> Value {
    match element.reflect() {
        Reflected::Scalar(value) => value,
        Reflected::Struct { .. } | Reflected::Opaque => Value::Null,
    }
}

/// `None` binds NULL for scalars. An optional record stays nested whether or
/// not it is set, so every instance of a type yields the same columns.
impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Reflected {
        match self {
            Some(inner) => inner.reflect(),
            None => match T::schema() {
                Some(schema) => Reflected::Struct {
                    schema,
                    fields: Vec::new(),
                },
                None => Reflected::Scalar(Value::Null),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    struct Point {
        x: i32,
    }

    const POINT: Schema = Schema::new("Point", &[FieldSpec::new("x")]);

    impl Reflect for Point {
        fn schema() -> Option<Schema> {
            Some(POINT)
        }

        fn reflect(&self) -> Reflected {
            Reflected::Struct {
                schema: POINT,
                fields: vec![self.x.reflect()],
            }
        }
    }

    #[test]
    fn test_scalars_have_no_schema() {
        assert_eq!(<i32 as Reflect>::schema(), None);
        assert_eq!(<String as Reflect>::schema(), None);
        assert_eq!(42i32.reflect(), Reflected::Scalar(Value::I32(42)));
        assert_eq!("abc".reflect(), Reflected::Scalar(Value::from("abc")));
    }

    #[test]
    fn test_small_and_unsigned_integers() {
        assert_eq!(7u8.reflect(), Reflected::Scalar(Value::I32(7)));
        assert_eq!((-7i8).reflect(), Reflected::Scalar(Value::I32(-7)));
        assert_eq!(9u16.reflect(), Reflected::Scalar(Value::I32(9)));
        assert_eq!(9u64.reflect(), Reflected::Scalar(Value::I64(9)));
        assert_eq!(9usize.reflect(), Reflected::Scalar(Value::I64(9)));
    }

    #[test]
    fn test_vectors_bind_as_arrays() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            tags.reflect(),
            Reflected::Scalar(Value::Array(vec![Value::from("a"), Value::from("b")]))
        );

        let ids: &[i64] = &[1, 2];
        assert_eq!(
            ids.reflect(),
            Reflected::Scalar(Value::Array(vec![Value::I64(1), Value::I64(2)]))
        );

        let sparse = vec![Some(1i32), None];
        assert_eq!(
            sparse.reflect(),
            Reflected::Scalar(Value::Array(vec![Value::I32(1), Value::Null]))
        );
    }

    #[test]
    fn test_byte_vectors_stay_bytes() {
        assert_eq!(
            vec![0xdeu8, 0xad].reflect(),
            Reflected::Scalar(Value::Bytes(vec![0xde, 0xad]))
        );
    }

    #[test]
    fn test_option_scalar() {
        assert_eq!(Some(5i64).reflect(), Reflected::Scalar(Value::I64(5)));
        assert_eq!(None::<i64>.reflect(), Reflected::Scalar(Value::Null));
    }

    #[test]
    fn test_option_record_is_always_nested() {
        assert!(Some(Point { x: 1 }).reflect().is_struct());
        assert!(None::<Point>.reflect().is_struct());
    }

    #[test]
    fn test_record_reflects_fields() {
        let point = Point { x: 3 };
        assert_eq!(
            point.reflect(),
            Reflected::Struct {
                schema: POINT,
                fields: vec![Reflected::Scalar(Value::I32(3))],
            }
        );
        assert!((&point).reflect().is_struct());
        assert!(Box::new(point).reflect().is_struct());
    }
}
