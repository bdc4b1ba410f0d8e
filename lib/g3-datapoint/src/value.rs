/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataPointValue {
    Double(f64),
    Signed(i64),
    Unsigned(u64),
}

impl DataPointValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            DataPointValue::Double(f) => *f,
            DataPointValue::Signed(i) => *i as f64,
            DataPointValue::Unsigned(u) => *u as f64,
        }
    }

    /// NaN and infinite values have no json representation and map to null.
    pub fn as_json_value(&self) -> Value {
        match self {
            DataPointValue::Double(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            DataPointValue::Signed(i) => Value::Number(Number::from(*i)),
            DataPointValue::Unsigned(u) => Value::Number(Number::from(*u)),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for DataPointValue {
                fn from(v: $t) -> Self {
                    DataPointValue::Signed(i64::from(v))
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for DataPointValue {
                fn from(v: $t) -> Self {
                    DataPointValue::Unsigned(u64::from(v))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for DataPointValue {
    fn from(v: f32) -> Self {
        DataPointValue::Double(f64::from(v))
    }
}

impl From<f64> for DataPointValue {
    fn from(v: f64) -> Self {
        DataPointValue::Double(v)
    }
}

impl fmt::Display for DataPointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataPointValue::Unsigned(u) => f.write_str(itoa::Buffer::new().format(*u)),
            DataPointValue::Signed(i) => f.write_str(itoa::Buffer::new().format(*i)),
            DataPointValue::Double(v) => f.write_str(ryu::Buffer::new().format(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_primitive() {
        assert_eq!(DataPointValue::from(-3i32), DataPointValue::Signed(-3));
        assert_eq!(DataPointValue::from(3u16), DataPointValue::Unsigned(3));
        assert_eq!(DataPointValue::from(0.5f32), DataPointValue::Double(0.5));
    }

    #[test]
    fn display() {
        assert_eq!(DataPointValue::Unsigned(10).to_string(), "10");
        assert_eq!(DataPointValue::Signed(-10).to_string(), "-10");
        assert_eq!(DataPointValue::Double(40.0).to_string(), "40.0");
        assert_eq!(DataPointValue::Double(12.5).to_string(), "12.5");
    }

    #[test]
    fn json() {
        assert_eq!(DataPointValue::Signed(-1).as_json_value().to_string(), "-1");
        assert_eq!(DataPointValue::Double(60.0).as_json_value().to_string(), "60.0");
        assert_eq!(DataPointValue::Double(f64::NAN).as_json_value(), Value::Null);
    }
}
