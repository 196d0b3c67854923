//! Serde support for the optional casting dtype carried by functional records.
//!
//! Candle's [`DType`] has no serde impls of its own, so records store it under
//! candle's short names (`"f32"`, `"bf16"`, ...) and accept the usual long
//! aliases on input.

use candle_core::DType;

pub(crate) fn parse_dtype(name: &str) -> Option<DType> {
    match name.to_ascii_lowercase().as_str() {
        "u8" | "uint8" => Some(DType::U8),
        "u32" | "uint32" => Some(DType::U32),
        "i64" | "int64" | "long" => Some(DType::I64),
        "bf16" | "bfloat16" => Some(DType::BF16),
        "f16" | "float16" | "half" => Some(DType::F16),
        "f32" | "float32" | "float" => Some(DType::F32),
        "f64" | "float64" | "double" => Some(DType::F64),
        _ => None,
    }
}

/// `#[serde(with = "crate::dtype::optional")]` for `Option<DType>` fields.
pub(crate) mod optional {
    use candle_core::DType;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dtype: &Option<DType>, serializer: S) -> Result<S::Ok, S::Error> {
        match dtype {
            Some(dtype) => serializer.serialize_some(dtype.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DType>, D::Error> {
        let name: Option<String> = Option::deserialize(deserializer)?;
        name.map(|name| {
            super::parse_dtype(&name)
                .ok_or_else(|| de::Error::custom(format!("unsupported dtype '{name}'")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_round_trip() {
        for dtype in [DType::U8, DType::U32, DType::I64, DType::BF16, DType::F16, DType::F32, DType::F64] {
            assert_eq!(parse_dtype(dtype.as_str()), Some(dtype));
        }
    }

    #[test]
    fn aliases_are_case_insensitive() {
        assert_eq!(parse_dtype("Float32"), Some(DType::F32));
        assert_eq!(parse_dtype("HALF"), Some(DType::F16));
        assert_eq!(parse_dtype("complex64"), None);
    }
}
