//! Option records for activation modules and their functional forms.
//!
//! Each record is an independent value type consumed by exactly one layer
//! constructor or functional call. Bounds such as `lower <= upper` or
//! `min_val <= max_val` are left to the consuming layer; setting a
//! field never looks at any other field.
//!
//! ```
//! use options::{EluOptions, ThresholdOptions};
//!
//! let elu = EluOptions::default().with_alpha(0.42).with_inplace(true);
//! assert_eq!(elu.alpha, 0.42);
//!
//! let threshold = ThresholdOptions::new(0.1, 20.0);
//! assert!(!threshold.inplace);
//! ```

use candle_core::DType;
use serde::{Deserialize, Serialize};

/// Options for the `ELU` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EluOptions {
    /// The `alpha` value of the ELU formulation. Default: 1.0
    pub alpha: f64,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for EluOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            inplace: false,
        }
    }
}

impl EluOptions {
    setters! {
        with_alpha => alpha: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for the `SELU` module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeluOptions {
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl SeluOptions {
    pub fn new(inplace: bool) -> Self {
        Self { inplace }
    }

    setters! {
        with_inplace => inplace: bool,
    }
}

/// Options for the `GLU` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GluOptions {
    /// Dimension on which the input is split in half. Default: -1
    pub dim: i64,
}

impl Default for GluOptions {
    fn default() -> Self {
        Self { dim: -1 }
    }
}

impl GluOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim }
    }

    setters! {
        with_dim => dim: i64,
    }
}

/// Options for the `Hardshrink` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardshrinkOptions {
    /// The `lambda` value of the Hardshrink formulation. Default: 0.5
    pub lambda: f64,
}

impl Default for HardshrinkOptions {
    fn default() -> Self {
        Self { lambda: 0.5 }
    }
}

impl HardshrinkOptions {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    setters! {
        with_lambda => lambda: f64,
    }
}

/// Options for the `Hardtanh` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardtanhOptions {
    /// Minimum value of the linear region. Default: -1
    pub min_val: f64,
    /// Maximum value of the linear region. Default: 1
    pub max_val: f64,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for HardtanhOptions {
    fn default() -> Self {
        Self {
            min_val: -1.0,
            max_val: 1.0,
            inplace: false,
        }
    }
}

impl HardtanhOptions {
    setters! {
        with_min_val => min_val: f64,
        with_max_val => max_val: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for the `LeakyReLU` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeakyReluOptions {
    /// Angle of the negative slope. Default: 1e-2
    pub negative_slope: f64,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for LeakyReluOptions {
    fn default() -> Self {
        Self {
            negative_slope: 1e-2,
            inplace: false,
        }
    }
}

impl LeakyReluOptions {
    setters! {
        with_negative_slope => negative_slope: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for the `Softmax` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftmaxOptions {
    /// Dimension along which Softmax is computed.
    pub dim: i64,
}

impl SoftmaxOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim }
    }

    setters! {
        with_dim => dim: i64,
    }
}

/// Options for `functional::softmax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftmaxFuncOptions {
    /// Dimension along which Softmax is computed.
    pub dim: i64,
    /// When set, the input is cast to this dtype before the operation runs,
    /// which guards against overflow in reduced precision.
    #[serde(
        default,
        with = "crate::dtype::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dtype: Option<DType>,
}

impl SoftmaxFuncOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim, dtype: None }
    }

    setters! {
        with_dim => dim: i64,
    }

    optional_setters! {
        with_dtype => dtype: DType,
    }
}

/// Options for the `Softmin` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftminOptions {
    /// Dimension along which Softmin is computed.
    pub dim: i64,
}

impl SoftminOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim }
    }

    setters! {
        with_dim => dim: i64,
    }
}

/// Options for `functional::softmin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftminFuncOptions {
    /// Dimension along which Softmin is computed.
    pub dim: i64,
    /// Optional dtype the input is cast to before the operation.
    #[serde(
        default,
        with = "crate::dtype::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dtype: Option<DType>,
}

impl SoftminFuncOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim, dtype: None }
    }

    setters! {
        with_dim => dim: i64,
    }

    optional_setters! {
        with_dtype => dtype: DType,
    }
}

/// Options for the `LogSoftmax` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSoftmaxOptions {
    /// Dimension along which LogSoftmax is computed.
    pub dim: i64,
}

impl LogSoftmaxOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim }
    }

    setters! {
        with_dim => dim: i64,
    }
}

/// Options for `functional::log_softmax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSoftmaxFuncOptions {
    /// Dimension along which LogSoftmax is computed.
    pub dim: i64,
    /// Optional dtype the input is cast to before the operation.
    #[serde(
        default,
        with = "crate::dtype::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dtype: Option<DType>,
}

impl LogSoftmaxFuncOptions {
    pub fn new(dim: i64) -> Self {
        Self { dim, dtype: None }
    }

    setters! {
        with_dim => dim: i64,
    }

    optional_setters! {
        with_dtype => dtype: DType,
    }
}

/// Options for the `PReLU` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreluOptions {
    /// Number of learnable `a` values. Only 1 or the number of input channels
    /// make sense. Default: 1
    pub num_parameters: i64,
    /// Initial value of `a`. Default: 0.25
    pub init: f64,
}

impl Default for PreluOptions {
    fn default() -> Self {
        Self {
            num_parameters: 1,
            init: 0.25,
        }
    }
}

impl PreluOptions {
    setters! {
        with_num_parameters => num_parameters: i64,
        with_init => init: f64,
    }
}

/// Options for the `ReLU` module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReluOptions {
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl ReluOptions {
    pub fn new(inplace: bool) -> Self {
        Self { inplace }
    }

    setters! {
        with_inplace => inplace: bool,
    }
}

/// Options for the `ReLU6` module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relu6Options {
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Relu6Options {
    pub fn new(inplace: bool) -> Self {
        Self { inplace }
    }

    setters! {
        with_inplace => inplace: bool,
    }
}

/// Options for the `RReLU` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RreluOptions {
    /// Lower bound of the uniform slope distribution. Default: 1/8
    pub lower: f64,
    /// Upper bound of the uniform slope distribution. Default: 1/3
    pub upper: f64,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for RreluOptions {
    fn default() -> Self {
        Self {
            lower: 1.0 / 8.0,
            upper: 1.0 / 3.0,
            inplace: false,
        }
    }
}

impl RreluOptions {
    setters! {
        with_lower => lower: f64,
        with_upper => upper: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for `functional::rrelu`.
///
/// A module reads its training flag from its own mode; the functional call
/// has to be told explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RreluFuncOptions {
    /// Lower bound of the uniform slope distribution. Default: 1/8
    pub lower: f64,
    /// Upper bound of the uniform slope distribution. Default: 1/3
    pub upper: f64,
    /// Sample slopes (training) or use their mean (evaluation). Default: false
    pub training: bool,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for RreluFuncOptions {
    fn default() -> Self {
        Self {
            lower: 1.0 / 8.0,
            upper: 1.0 / 3.0,
            training: false,
            inplace: false,
        }
    }
}

impl RreluFuncOptions {
    setters! {
        with_lower => lower: f64,
        with_upper => upper: f64,
        with_training => training: bool,
        with_inplace => inplace: bool,
    }
}

/// Options for the `CELU` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CeluOptions {
    /// The `alpha` value of the CELU formulation. Default: 1.0
    pub alpha: f64,
    /// Run the operation in-place. Default: false
    pub inplace: bool,
}

impl Default for CeluOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            inplace: false,
        }
    }
}

impl CeluOptions {
    setters! {
        with_alpha => alpha: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for the `Softplus` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftplusOptions {
    /// The `beta` value of the Softplus formulation. Default: 1
    pub beta: f64,
    /// Inputs above this revert to a linear function. Default: 20
    pub threshold: f64,
}

impl Default for SoftplusOptions {
    fn default() -> Self {
        Self {
            beta: 1.0,
            threshold: 20.0,
        }
    }
}

impl SoftplusOptions {
    setters! {
        with_beta => beta: f64,
        with_threshold => threshold: f64,
    }
}

/// Options for the `Softshrink` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftshrinkOptions {
    /// The `lambda` value of the Softshrink formulation. Default: 0.5
    pub lambda: f64,
}

impl Default for SoftshrinkOptions {
    fn default() -> Self {
        Self { lambda: 0.5 }
    }
}

impl SoftshrinkOptions {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    setters! {
        with_lambda => lambda: f64,
    }
}

/// Options for the `Threshold` module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOptions {
    /// The value to threshold at.
    pub threshold: f64,
    /// The value to replace with.
    pub value: f64,
    /// Run the operation in-place. Default: false
    #[serde(default)]
    pub inplace: bool,
}

impl ThresholdOptions {
    pub fn new(threshold: f64, value: f64) -> Self {
        Self {
            threshold,
            value,
            inplace: false,
        }
    }

    setters! {
        with_threshold => threshold: f64,
        with_value => value: f64,
        with_inplace => inplace: bool,
    }
}

/// Options for `functional::gumbel_softmax`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GumbelSoftmaxFuncOptions {
    /// Non-negative temperature. Default: 1.0
    pub tau: f64,
    /// Discretise samples to one-hot vectors while differentiating them as
    /// the soft sample. Default: false
    pub hard: bool,
    /// Dimension along which softmax is computed. Default: -1
    pub dim: i64,
}

impl Default for GumbelSoftmaxFuncOptions {
    fn default() -> Self {
        Self {
            tau: 1.0,
            hard: false,
            dim: -1,
        }
    }
}

impl GumbelSoftmaxFuncOptions {
    setters! {
        with_tau => tau: f64,
        with_hard => hard: bool,
        with_dim => dim: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rrelu_accepts_inverted_bounds() {
        let options = RreluOptions::default().with_lower(0.9).with_upper(0.1);
        assert_eq!(options.lower, 0.9);
        assert_eq!(options.upper, 0.1);
    }

    #[test]
    fn func_dtype_is_absent_until_set() {
        let options = SoftmaxFuncOptions::new(1);
        assert_eq!(options.dtype, None);

        let options = options.with_dtype(DType::F32);
        assert_eq!(options.dtype, Some(DType::F32));
        assert_eq!(options.dim, 1);
    }

    #[test]
    fn fields_are_mutable_in_place() {
        let mut options = HardtanhOptions::default();
        options.min_val = -2.0;
        let max_val = &mut options.max_val;
        *max_val = 2.0;
        assert_eq!(options, HardtanhOptions::default().with_min_val(-2.0).with_max_val(2.0));
    }

    #[test]
    fn func_dtype_serializes_by_name() -> serde_json::Result<()> {
        let options = LogSoftmaxFuncOptions::new(0).with_dtype(DType::BF16);
        let json = serde_json::to_string(&options)?;
        assert_eq!(json, r#"{"dim":0,"dtype":"bf16"}"#);

        let parsed: LogSoftmaxFuncOptions = serde_json::from_str(r#"{"dim": 0, "dtype": "half"}"#)?;
        assert_eq!(parsed.dtype, Some(DType::F16));

        assert!(serde_json::from_str::<LogSoftmaxFuncOptions>(r#"{"dim": 0, "dtype": "q4"}"#).is_err());
        Ok(())
    }

    #[test]
    fn omitted_fields_take_documented_defaults() -> serde_json::Result<()> {
        let parsed: LeakyReluOptions = serde_json::from_str(r#"{"inplace": true}"#)?;
        assert_eq!(parsed.negative_slope, 0.01);
        assert!(parsed.inplace);

        let parsed: ThresholdOptions = serde_json::from_str(r#"{"threshold": 0.5, "value": 0.0}"#)?;
        assert_eq!(parsed, ThresholdOptions::new(0.5, 0.0));
        Ok(())
    }
}
