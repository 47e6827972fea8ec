use std::fmt::Display;

use super::{Value, View1, View2};
use crate::container::{Matrix, Vector};

// Every shape has a `convert` of the same shape, so the named conversions
// below expand identically for views and containers.
macro_rules! conversions {
    ($($shape:ident),*) => {$(
        impl $shape<bool> {
            pub fn to_int(&self, true_value: i32, false_value: i32) -> $shape<i32> {
                self.convert(move |b| if b { true_value } else { false_value })
            }

            pub fn to_long(&self, true_value: i64, false_value: i64) -> $shape<i64> {
                self.convert(move |b| if b { true_value } else { false_value })
            }

            pub fn to_double(&self, true_value: f64, false_value: f64) -> $shape<f64> {
                self.convert(move |b| if b { true_value } else { false_value })
            }

            pub fn to_obj<V: Value>(&self, true_value: V, false_value: V) -> $shape<Option<V>> {
                self.convert(move |b| {
                    Some(if b { true_value.clone() } else { false_value.clone() })
                })
            }

            pub fn as_obj(&self) -> $shape<Option<bool>> {
                self.convert(Some)
            }

            pub fn to_str(&self) -> $shape<Option<String>> {
                self.convert(|b| Some(b.to_string()))
            }
        }

        impl $shape<i32> {
            pub fn to_bool<F>(&self, f: F) -> $shape<bool>
            where
                F: Fn(i32) -> bool + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_long<F>(&self, f: F) -> $shape<i64>
            where
                F: Fn(i32) -> i64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_double<F>(&self, f: F) -> $shape<f64>
            where
                F: Fn(i32) -> f64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_obj<V: Value, F>(&self, f: F) -> $shape<Option<V>>
            where
                F: Fn(i32) -> V + Send + Sync + 'static,
            {
                self.convert(move |x| Some(f(x)))
            }

            /// Widen every value to 64 bits.
            pub fn as_long(&self) -> $shape<i64> {
                self.convert(i64::from)
            }

            pub fn as_double(&self) -> $shape<f64> {
                self.convert(f64::from)
            }

            pub fn as_obj(&self) -> $shape<Option<i32>> {
                self.convert(Some)
            }

            pub fn to_str(&self) -> $shape<Option<String>> {
                self.convert(|x| Some(x.to_string()))
            }
        }

        impl $shape<i64> {
            pub fn to_bool<F>(&self, f: F) -> $shape<bool>
            where
                F: Fn(i64) -> bool + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_int<F>(&self, f: F) -> $shape<i32>
            where
                F: Fn(i64) -> i32 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_double<F>(&self, f: F) -> $shape<f64>
            where
                F: Fn(i64) -> f64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_obj<V: Value, F>(&self, f: F) -> $shape<Option<V>>
            where
                F: Fn(i64) -> V + Send + Sync + 'static,
            {
                self.convert(move |x| Some(f(x)))
            }

            pub fn as_obj(&self) -> $shape<Option<i64>> {
                self.convert(Some)
            }

            pub fn to_str(&self) -> $shape<Option<String>> {
                self.convert(|x| Some(x.to_string()))
            }
        }

        impl $shape<f64> {
            pub fn to_bool<F>(&self, f: F) -> $shape<bool>
            where
                F: Fn(f64) -> bool + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_int<F>(&self, f: F) -> $shape<i32>
            where
                F: Fn(f64) -> i32 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_long<F>(&self, f: F) -> $shape<i64>
            where
                F: Fn(f64) -> i64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_obj<V: Value, F>(&self, f: F) -> $shape<Option<V>>
            where
                F: Fn(f64) -> V + Send + Sync + 'static,
            {
                self.convert(move |x| Some(f(x)))
            }

            pub fn as_obj(&self) -> $shape<Option<f64>> {
                self.convert(Some)
            }

            pub fn to_str(&self) -> $shape<Option<String>> {
                self.convert(|x| Some(x.to_string()))
            }
        }

        impl<V: Value> $shape<Option<V>> {
            pub fn to_bool<F>(&self, f: F) -> $shape<bool>
            where
                F: Fn(Option<V>) -> bool + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_int<F>(&self, f: F) -> $shape<i32>
            where
                F: Fn(Option<V>) -> i32 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_long<F>(&self, f: F) -> $shape<i64>
            where
                F: Fn(Option<V>) -> i64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_double<F>(&self, f: F) -> $shape<f64>
            where
                F: Fn(Option<V>) -> f64 + Send + Sync + 'static,
            {
                self.convert(f)
            }

            pub fn to_obj<U: Value, F>(&self, f: F) -> $shape<Option<U>>
            where
                F: Fn(Option<V>) -> Option<U> + Send + Sync + 'static,
            {
                self.convert(f)
            }
        }

        impl<V: Value + Display> $shape<Option<V>> {
            /// Render present values with `Display`; absent values stay absent.
            pub fn to_str(&self) -> $shape<Option<String>> {
                self.convert(|x| x.map(|v| v.to_string()))
            }

            /// Render values with `Display`, writing `null_value` for absent ones.
            pub fn to_str_or(&self, null_value: &str) -> $shape<Option<String>> {
                let null_value = null_value.to_string();
                self.convert(move |x| Some(x.map_or_else(|| null_value.clone(), |v| v.to_string())))
            }
        }
    )*};
}

conversions!(View1, View2, Vector, Matrix);
