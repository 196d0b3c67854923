//! Dimension-generic option records for pooling and unpooling.
//!
//! Each family is defined once over the spatial dimensionality `D`; the 1-D,
//! 2-D and 3-D names are aliases of that one definition. Per-dimension fields
//! are [`ExpandingArray<D>`], so a scalar kernel size broadcasts and an array
//! must have exactly `D` entries.
//!
//! Where a stride is present it defaults to the kernel size. The copy happens
//! in the constructor, so later edits to `kernel_size` do not move `stride`.
//!
//! ```
//! use options::{AvgPool2dOptions, MaxPool2dOptions};
//!
//! let avg = AvgPool2dOptions::new([3, 2]).with_stride([2, 2]);
//! assert_eq!(avg.kernel_size, [3, 2]);
//!
//! let max = MaxPool2dOptions::new(3);
//! assert_eq!(max.stride, [3, 3]);
//! assert_eq!(max.dilation, [1, 1]);
//! ```

use candle_core::Tensor;
use serde::{Deserialize, Serialize};

use crate::{
    error::{OptionsError, Result},
    expanding::ExpandingArray,
};

/// Options for a `D`-dimensional average pooling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AvgPoolSpec<D>")]
pub struct AvgPoolOptions<const D: usize> {
    /// Size of the window to average over.
    pub kernel_size: ExpandingArray<D>,
    /// Stride of the window. Default: `kernel_size`
    pub stride: ExpandingArray<D>,
    /// Implicit zero padding added on both sides. Default: 0
    pub padding: ExpandingArray<D>,
    /// Use `ceil` instead of `floor` for the output shape. Default: false
    pub ceil_mode: bool,
    /// Include the zero padding in the average. Default: true
    pub count_include_pad: bool,
    /// Divisor used instead of the window size when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor_override: Option<i64>,
}

impl<const D: usize> AvgPoolOptions<D> {
    pub fn new(kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        let kernel_size = kernel_size.into();
        Self {
            kernel_size,
            stride: kernel_size,
            padding: ExpandingArray::broadcast(0),
            ceil_mode: false,
            count_include_pad: true,
            divisor_override: None,
        }
    }

    /// Builds from a runtime sequence, rejecting lengths other than `D`.
    pub fn try_new<K>(kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(kernel_size.try_into()?))
    }

    setters! {
        with_kernel_size => kernel_size: ExpandingArray<D>,
        with_stride => stride: ExpandingArray<D>,
        with_padding => padding: ExpandingArray<D>,
        with_ceil_mode => ceil_mode: bool,
        with_count_include_pad => count_include_pad: bool,
    }

    optional_setters! {
        with_divisor_override => divisor_override: i64,
    }
}

#[derive(Deserialize)]
struct AvgPoolSpec<const D: usize> {
    kernel_size: ExpandingArray<D>,
    #[serde(default)]
    stride: Option<ExpandingArray<D>>,
    #[serde(default)]
    padding: Option<ExpandingArray<D>>,
    #[serde(default)]
    ceil_mode: Option<bool>,
    #[serde(default)]
    count_include_pad: Option<bool>,
    #[serde(default)]
    divisor_override: Option<i64>,
}

impl<const D: usize> From<AvgPoolSpec<D>> for AvgPoolOptions<D> {
    fn from(spec: AvgPoolSpec<D>) -> Self {
        let mut options = Self::new(spec.kernel_size);
        if let Some(stride) = spec.stride {
            options.stride = stride;
        }
        if let Some(padding) = spec.padding {
            options.padding = padding;
        }
        if let Some(ceil_mode) = spec.ceil_mode {
            options.ceil_mode = ceil_mode;
        }
        if let Some(count_include_pad) = spec.count_include_pad {
            options.count_include_pad = count_include_pad;
        }
        options.divisor_override = spec.divisor_override;
        options
    }
}

/// Options for the `AvgPool1d` module.
pub type AvgPool1dOptions = AvgPoolOptions<1>;
/// Options for the `AvgPool2d` module.
pub type AvgPool2dOptions = AvgPoolOptions<2>;
/// Options for the `AvgPool3d` module.
pub type AvgPool3dOptions = AvgPoolOptions<3>;

/// Options for a `D`-dimensional max pooling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MaxPoolSpec<D>")]
pub struct MaxPoolOptions<const D: usize> {
    /// Size of the window to take a max over.
    pub kernel_size: ExpandingArray<D>,
    /// Stride of the window. Default: `kernel_size`
    pub stride: ExpandingArray<D>,
    /// Implicit zero padding added on both sides. Default: 0
    pub padding: ExpandingArray<D>,
    /// Spacing between elements within the window. Default: 1
    pub dilation: ExpandingArray<D>,
    /// Use `ceil` instead of `floor` for the output shape. Default: false
    pub ceil_mode: bool,
}

impl<const D: usize> MaxPoolOptions<D> {
    pub fn new(kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        let kernel_size = kernel_size.into();
        Self {
            kernel_size,
            stride: kernel_size,
            padding: ExpandingArray::broadcast(0),
            dilation: ExpandingArray::broadcast(1),
            ceil_mode: false,
        }
    }

    /// Builds from a runtime sequence, rejecting lengths other than `D`.
    pub fn try_new<K>(kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(kernel_size.try_into()?))
    }

    setters! {
        with_kernel_size => kernel_size: ExpandingArray<D>,
        with_stride => stride: ExpandingArray<D>,
        with_padding => padding: ExpandingArray<D>,
        with_dilation => dilation: ExpandingArray<D>,
        with_ceil_mode => ceil_mode: bool,
    }
}

#[derive(Deserialize)]
struct MaxPoolSpec<const D: usize> {
    kernel_size: ExpandingArray<D>,
    #[serde(default)]
    stride: Option<ExpandingArray<D>>,
    #[serde(default)]
    padding: Option<ExpandingArray<D>>,
    #[serde(default)]
    dilation: Option<ExpandingArray<D>>,
    #[serde(default)]
    ceil_mode: Option<bool>,
}

impl<const D: usize> From<MaxPoolSpec<D>> for MaxPoolOptions<D> {
    fn from(spec: MaxPoolSpec<D>) -> Self {
        let mut options = Self::new(spec.kernel_size);
        if let Some(stride) = spec.stride {
            options.stride = stride;
        }
        if let Some(padding) = spec.padding {
            options.padding = padding;
        }
        if let Some(dilation) = spec.dilation {
            options.dilation = dilation;
        }
        if let Some(ceil_mode) = spec.ceil_mode {
            options.ceil_mode = ceil_mode;
        }
        options
    }
}

/// Options for the `MaxPool1d` module.
pub type MaxPool1dOptions = MaxPoolOptions<1>;
/// Options for the `MaxPool2d` module.
pub type MaxPool2dOptions = MaxPoolOptions<2>;
/// Options for the `MaxPool3d` module.
pub type MaxPool3dOptions = MaxPoolOptions<3>;

/// Options for a `D`-dimensional adaptive max pooling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveMaxPoolOptions<const D: usize> {
    /// The target output size.
    pub output_size: ExpandingArray<D>,
}

impl<const D: usize> AdaptiveMaxPoolOptions<D> {
    pub fn new(output_size: impl Into<ExpandingArray<D>>) -> Self {
        Self {
            output_size: output_size.into(),
        }
    }

    pub fn try_new<K>(output_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(output_size.try_into()?))
    }

    setters! {
        with_output_size => output_size: ExpandingArray<D>,
    }
}

/// Options for the `AdaptiveMaxPool1d` module.
pub type AdaptiveMaxPool1dOptions = AdaptiveMaxPoolOptions<1>;
/// Options for the `AdaptiveMaxPool2d` module.
pub type AdaptiveMaxPool2dOptions = AdaptiveMaxPoolOptions<2>;
/// Options for the `AdaptiveMaxPool3d` module.
pub type AdaptiveMaxPool3dOptions = AdaptiveMaxPoolOptions<3>;

/// Options for a `D`-dimensional adaptive average pooling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveAvgPoolOptions<const D: usize> {
    /// The target output size.
    pub output_size: ExpandingArray<D>,
}

impl<const D: usize> AdaptiveAvgPoolOptions<D> {
    pub fn new(output_size: impl Into<ExpandingArray<D>>) -> Self {
        Self {
            output_size: output_size.into(),
        }
    }

    pub fn try_new<K>(output_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(output_size.try_into()?))
    }

    setters! {
        with_output_size => output_size: ExpandingArray<D>,
    }
}

/// Options for the `AdaptiveAvgPool1d` module.
pub type AdaptiveAvgPool1dOptions = AdaptiveAvgPoolOptions<1>;
/// Options for the `AdaptiveAvgPool2d` module.
pub type AdaptiveAvgPool2dOptions = AdaptiveAvgPoolOptions<2>;
/// Options for the `AdaptiveAvgPool3d` module.
pub type AdaptiveAvgPool3dOptions = AdaptiveAvgPoolOptions<3>;

/// Options for a `D`-dimensional max unpooling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MaxUnpoolSpec<D>")]
pub struct MaxUnpoolOptions<const D: usize> {
    /// Size of the max pooling window being inverted.
    pub kernel_size: ExpandingArray<D>,
    /// Stride of the window. Default: `kernel_size`
    pub stride: ExpandingArray<D>,
    /// Implicit zero padding that was added to the input. Default: 0
    pub padding: ExpandingArray<D>,
}

impl<const D: usize> MaxUnpoolOptions<D> {
    pub fn new(kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        let kernel_size = kernel_size.into();
        Self {
            kernel_size,
            stride: kernel_size,
            padding: ExpandingArray::broadcast(0),
        }
    }

    pub fn try_new<K>(kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(kernel_size.try_into()?))
    }

    setters! {
        with_kernel_size => kernel_size: ExpandingArray<D>,
        with_stride => stride: ExpandingArray<D>,
        with_padding => padding: ExpandingArray<D>,
    }
}

#[derive(Deserialize)]
struct MaxUnpoolSpec<const D: usize> {
    kernel_size: ExpandingArray<D>,
    #[serde(default)]
    stride: Option<ExpandingArray<D>>,
    #[serde(default)]
    padding: Option<ExpandingArray<D>>,
}

impl<const D: usize> From<MaxUnpoolSpec<D>> for MaxUnpoolOptions<D> {
    fn from(spec: MaxUnpoolSpec<D>) -> Self {
        let mut options = Self::new(spec.kernel_size);
        if let Some(stride) = spec.stride {
            options.stride = stride;
        }
        if let Some(padding) = spec.padding {
            options.padding = padding;
        }
        options
    }
}

/// Options for the `MaxUnpool1d` module.
pub type MaxUnpool1dOptions = MaxUnpoolOptions<1>;
/// Options for the `MaxUnpool2d` module.
pub type MaxUnpool2dOptions = MaxUnpoolOptions<2>;
/// Options for the `MaxUnpool3d` module.
pub type MaxUnpool3dOptions = MaxUnpoolOptions<3>;

/// Options for `functional::max_unpool{1,2,3}d`.
///
/// Adds an explicit `output_size`, which the module form infers from the
/// tensor it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MaxUnpoolFuncSpec<D>")]
pub struct MaxUnpoolFuncOptions<const D: usize> {
    /// Size of the max pooling window being inverted.
    pub kernel_size: ExpandingArray<D>,
    /// Stride of the window. Default: `kernel_size`
    pub stride: ExpandingArray<D>,
    /// Implicit zero padding that was added to the input. Default: 0
    pub padding: ExpandingArray<D>,
    /// The targeted output size. Unlike the other fields it is not tied to `D`,
    /// since callers may pass the full input shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size: Option<Vec<i64>>,
}

impl<const D: usize> MaxUnpoolFuncOptions<D> {
    pub fn new(kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        let kernel_size = kernel_size.into();
        Self {
            kernel_size,
            stride: kernel_size,
            padding: ExpandingArray::broadcast(0),
            output_size: None,
        }
    }

    pub fn try_new<K>(kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(kernel_size.try_into()?))
    }

    setters! {
        with_kernel_size => kernel_size: ExpandingArray<D>,
        with_stride => stride: ExpandingArray<D>,
        with_padding => padding: ExpandingArray<D>,
    }

    optional_setters! {
        with_output_size => output_size: Vec<i64>,
    }
}

#[derive(Deserialize)]
struct MaxUnpoolFuncSpec<const D: usize> {
    kernel_size: ExpandingArray<D>,
    #[serde(default)]
    stride: Option<ExpandingArray<D>>,
    #[serde(default)]
    padding: Option<ExpandingArray<D>>,
    #[serde(default)]
    output_size: Option<Vec<i64>>,
}

impl<const D: usize> From<MaxUnpoolFuncSpec<D>> for MaxUnpoolFuncOptions<D> {
    fn from(spec: MaxUnpoolFuncSpec<D>) -> Self {
        let mut options = Self::new(spec.kernel_size);
        if let Some(stride) = spec.stride {
            options.stride = stride;
        }
        if let Some(padding) = spec.padding {
            options.padding = padding;
        }
        options.output_size = spec.output_size;
        options
    }
}

/// Options for a `D`-dimensional fractional max pooling module.
///
/// Either `output_size` or `output_ratio` is expected to be set; which one
/// wins, and whether the ratio lies in `(0, 1)`, is decided by the layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionalMaxPoolOptions<const D: usize> {
    /// Size of the window to take a max over.
    pub kernel_size: ExpandingArray<D>,
    /// Target output size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_size: Option<ExpandingArray<D>>,
    /// Output size as a ratio of the input size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_ratio: Option<ExpandingArray<D, f64>>,
    /// Pre-drawn pooling offsets; the layer samples its own when absent.
    #[serde(skip)]
    pub random_samples: Option<Tensor>,
}

impl<const D: usize> FractionalMaxPoolOptions<D> {
    pub fn new(kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        Self {
            kernel_size: kernel_size.into(),
            output_size: None,
            output_ratio: None,
            random_samples: None,
        }
    }

    pub fn try_new<K>(kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(kernel_size.try_into()?))
    }

    setters! {
        with_kernel_size => kernel_size: ExpandingArray<D>,
    }

    optional_setters! {
        with_output_size => output_size: ExpandingArray<D>,
        with_output_ratio => output_ratio: ExpandingArray<D, f64>,
        with_random_samples => random_samples: Tensor,
    }
}

/// Options for the `FractionalMaxPool2d` module.
pub type FractionalMaxPool2dOptions = FractionalMaxPoolOptions<2>;
/// Options for the `FractionalMaxPool3d` module.
pub type FractionalMaxPool3dOptions = FractionalMaxPoolOptions<3>;

/// Options for a `D`-dimensional power-average (Lp) pooling module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LpPoolSpec<D>")]
pub struct LpPoolOptions<const D: usize> {
    /// The `p` of the power average.
    pub norm_type: f64,
    /// Size of the window.
    pub kernel_size: ExpandingArray<D>,
    /// Stride of the window. Default: `kernel_size`
    pub stride: ExpandingArray<D>,
    /// Use `ceil` instead of `floor` for the output shape. Default: false
    pub ceil_mode: bool,
}

impl<const D: usize> LpPoolOptions<D> {
    pub fn new(norm_type: f64, kernel_size: impl Into<ExpandingArray<D>>) -> Self {
        let kernel_size = kernel_size.into();
        Self {
            norm_type,
            kernel_size,
            stride: kernel_size,
            ceil_mode: false,
        }
    }

    pub fn try_new<K>(norm_type: f64, kernel_size: K) -> Result<Self>
    where
        K: TryInto<ExpandingArray<D>>,
        OptionsError: From<K::Error>,
    {
        Ok(Self::new(norm_type, kernel_size.try_into()?))
    }

    setters! {
        with_norm_type => norm_type: f64,
        with_kernel_size => kernel_size: ExpandingArray<D>,
        with_stride => stride: ExpandingArray<D>,
        with_ceil_mode => ceil_mode: bool,
    }
}

#[derive(Deserialize)]
struct LpPoolSpec<const D: usize> {
    norm_type: f64,
    kernel_size: ExpandingArray<D>,
    #[serde(default)]
    stride: Option<ExpandingArray<D>>,
    #[serde(default)]
    ceil_mode: Option<bool>,
}

impl<const D: usize> From<LpPoolSpec<D>> for LpPoolOptions<D> {
    fn from(spec: LpPoolSpec<D>) -> Self {
        let mut options = Self::new(spec.norm_type, spec.kernel_size);
        if let Some(stride) = spec.stride {
            options.stride = stride;
        }
        if let Some(ceil_mode) = spec.ceil_mode {
            options.ceil_mode = ceil_mode;
        }
        options
    }
}

/// Options for the `LPPool1d` module.
pub type LpPool1dOptions = LpPoolOptions<1>;
/// Options for the `LPPool2d` module.
pub type LpPool2dOptions = LpPoolOptions<2>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_materialized_from_kernel_size() {
        let options = MaxUnpool3dOptions::new(3).with_kernel_size(5);
        assert_eq!(options.kernel_size, [5, 5, 5]);
        assert_eq!(options.stride, [3, 3, 3]);

        let mut options = LpPool2dOptions::new(2.0, [3, 4]);
        options.kernel_size = ExpandingArray::broadcast(7);
        assert_eq!(options.stride, [3, 4]);
    }

    #[test]
    fn try_new_rejects_wrong_length() {
        let err = MaxPool2dOptions::try_new(vec![3i64, 3, 3]).unwrap_err();
        assert!(matches!(
            err,
            OptionsError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));
        assert!(AdaptiveAvgPool3dOptions::try_new(&[1i64, 1][..]).is_err());
    }

    #[test]
    fn try_new_accepts_scalars_and_arrays() -> Result<()> {
        assert_eq!(AvgPool3dOptions::try_new(2)?.kernel_size, [2, 2, 2]);
        assert_eq!(AvgPool2dOptions::try_new([2, 1])?.stride, [2, 1]);
        assert_eq!(LpPool1dOptions::try_new(1.0, vec![4i64])?.stride, [4]);
        Ok(())
    }

    #[test]
    fn deserialized_stride_defaults_to_kernel_size() -> serde_json::Result<()> {
        let options: MaxPool2dOptions = serde_json::from_str(r#"{"kernel_size": [3, 2]}"#)?;
        assert_eq!(options, MaxPool2dOptions::new([3, 2]));

        let options: AvgPool1dOptions =
            serde_json::from_str(r#"{"kernel_size": 4, "stride": 2, "divisor_override": 3}"#)?;
        assert_eq!(options.stride, [2]);
        assert_eq!(options.divisor_override, Some(3));
        assert!(options.count_include_pad);
        Ok(())
    }

    #[test]
    fn fractional_ratio_is_per_dimension() {
        let options = FractionalMaxPool2dOptions::new(3).with_output_ratio(0.5);
        assert_eq!(options.output_ratio, Some(ExpandingArray::broadcast(0.5)));
        assert!(options.output_size.is_none());
        assert!(options.random_samples.is_none());
    }
}
