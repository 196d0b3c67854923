//! Fixed-size per-dimension tuples used by the spatial option records.
//!
//! An [`ExpandingArray<D, T>`] always holds exactly `D` values. A scalar
//! broadcasts to every position, an array of length `D` is taken as-is, and
//! runtime sequences (`Vec<T>`, `&[T]`) are length-checked and rejected with
//! [`OptionsError::ShapeMismatch`] instead of being truncated or padded.
//!
//! In configuration files the same rules apply: `kernel_size = 3` broadcasts,
//! `kernel_size = [3, 2]` is checked against `D`.

use std::{fmt, marker::PhantomData, ops::Index, slice};

use serde::{
    de::{self, IntoDeserializer, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::error::{OptionsError, Result};

/// `D` values, one per spatial dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpandingArray<const D: usize, T = i64> {
    values: [T; D],
}

impl<const D: usize, T: Copy> ExpandingArray<D, T> {
    pub fn new(values: [T; D]) -> Self {
        Self { values }
    }

    /// Repeats `value` in every dimension.
    pub fn broadcast(value: T) -> Self {
        Self { values: [value; D] }
    }

    /// Builds from a runtime sequence whose length must equal `D`.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        match <[T; D]>::try_from(values) {
            Ok(values) => Ok(Self { values }),
            Err(_) => {
                log::debug!(
                    "rejecting {}-element sequence for {}-dimensional option",
                    values.len(),
                    D
                );
                Err(OptionsError::ShapeMismatch {
                    expected: D,
                    actual: values.len(),
                })
            }
        }
    }

    /// Number of dimensions covered by the tuple.
    pub const fn dims(&self) -> usize {
        D
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_array(&self) -> &[T; D] {
        &self.values
    }

    pub fn into_inner(self) -> [T; D] {
        self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<const D: usize, T: Copy> From<T> for ExpandingArray<D, T> {
    fn from(value: T) -> Self {
        Self::broadcast(value)
    }
}

impl<const D: usize, T: Copy> From<[T; D]> for ExpandingArray<D, T> {
    fn from(values: [T; D]) -> Self {
        Self::new(values)
    }
}

impl<const D: usize, T: Copy> TryFrom<&[T]> for ExpandingArray<D, T> {
    type Error = OptionsError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::try_from_slice(values)
    }
}

impl<const D: usize, T: Copy> TryFrom<Vec<T>> for ExpandingArray<D, T> {
    type Error = OptionsError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::try_from_slice(&values)
    }
}

impl<const D: usize, T: PartialEq> PartialEq<[T; D]> for ExpandingArray<D, T> {
    fn eq(&self, other: &[T; D]) -> bool {
        self.values == *other
    }
}

impl<const D: usize, T> Index<usize> for ExpandingArray<D, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<const D: usize, T> AsRef<[T]> for ExpandingArray<D, T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<'a, const D: usize, T> IntoIterator for &'a ExpandingArray<D, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<const D: usize, T: fmt::Display> fmt::Display for ExpandingArray<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

impl<const D: usize, T: Serialize> Serialize for ExpandingArray<D, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

struct ExpandingArrayVisitor<const D: usize, T>(PhantomData<T>);

impl<'de, const D: usize, T> Visitor<'de> for ExpandingArrayVisitor<D, T>
where
    T: Deserialize<'de> + Copy,
{
    type Value = ExpandingArray<D, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a scalar or a list of {D} values")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
        T::deserialize(value.into_deserializer()).map(ExpandingArray::broadcast)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
        T::deserialize(value.into_deserializer()).map(ExpandingArray::broadcast)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
        T::deserialize(value.into_deserializer()).map(ExpandingArray::broadcast)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(D));
        while let Some(value) = seq.next_element::<T>()? {
            values.push(value);
        }
        ExpandingArray::try_from_slice(&values).map_err(de::Error::custom)
    }
}

impl<'de, const D: usize, T> Deserialize<'de> for ExpandingArray<D, T>
where
    T: Deserialize<'de> + Copy,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> std::result::Result<Self, De::Error> {
        deserializer.deserialize_any(ExpandingArrayVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_to_every_dimension() {
        let kernel: ExpandingArray<3> = 5.into();
        assert_eq!(kernel, [5, 5, 5]);
        assert_eq!(kernel.dims(), 3);
    }

    #[test]
    fn exact_length_sequences_are_accepted() -> Result<()> {
        let kernel = ExpandingArray::<2>::try_from(vec![3i64, 4])?;
        assert_eq!(kernel.as_slice(), &[3, 4]);
        assert_eq!(kernel[1], 4);
        Ok(())
    }

    #[test]
    fn mismatched_sequences_are_rejected() {
        let err = ExpandingArray::<2>::try_from(vec![1i64, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            OptionsError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));

        let err = ExpandingArray::<3, f64>::try_from_slice(&[0.5]).unwrap_err();
        assert_eq!(err.to_string(), "expected 3 per-dimension values, got 1");
    }

    #[test]
    fn display_lists_every_dimension() {
        let stride = ExpandingArray::<2>::new([2, 1]);
        assert_eq!(stride.to_string(), "(2, 1)");
    }

    #[test]
    fn deserializes_scalars_and_sequences() -> Result<()> {
        let broadcast: ExpandingArray<2> = serde_json::from_str("4")?;
        assert_eq!(broadcast, [4, 4]);

        let explicit: ExpandingArray<2, f64> = serde_json::from_str("[0.5, 0.25]")?;
        assert_eq!(explicit, [0.5, 0.25]);

        assert!(serde_json::from_str::<ExpandingArray<2>>("[1, 2, 3]").is_err());
        Ok(())
    }

    #[test]
    fn malformed_values_report_the_expected_shape() {
        let err = serde_json::from_str::<ExpandingArray<2>>(r#""wide""#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("a scalar or a list of 2 values"), "{message}");

        let err = serde_json::from_str::<ExpandingArray<2>>("3.5").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected i64"), "{message}");
        assert!(!message.contains("untagged"), "{message}");
    }

    #[test]
    fn toml_integers_broadcast() -> Result<()> {
        #[derive(Deserialize)]
        struct Window {
            size: ExpandingArray<3>,
        }

        let window: Window = toml::from_str("size = -1")?;
        assert_eq!(window.size, [-1, -1, -1]);
        Ok(())
    }

    #[test]
    fn serializes_as_sequence() -> Result<()> {
        let padding = ExpandingArray::<3>::new([0, 1, 2]);
        assert_eq!(serde_json::to_string(&padding)?, "[0,1,2]");
        Ok(())
    }
}
