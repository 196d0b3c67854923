//! Option records for neural-network layers and their functional counterparts.
//!
//! Every layer constructor and functional call takes exactly one record type
//! from this crate. Records are plain values: public fields with documented
//! defaults, a `new` constructor for values that have no sensible default, and
//! consuming `with_*` setters for chained configuration. They carry no logic;
//! the kernels that read them live with the layers.
//!
//! * Activation records ([`EluOptions`], [`SoftmaxOptions`], ...) hold scalar
//!   knobs such as slopes, thresholds and in-place flags.
//! * Pooling records are generic over the spatial dimensionality `D` and store
//!   per-dimension values as [`ExpandingArray<D>`]; a scalar broadcasts, and a
//!   sequence of the wrong length is rejected with
//!   [`OptionsError::ShapeMismatch`].
//! * [`functional`] aliases module records whose functional form takes the
//!   same fields, and exposes the records that add functional-only fields.
//!
//! Records are not validated against each other: inverted bounds, head counts
//! that do not divide the embedding width, and similar misuse surface in the
//! consuming layer.
//!
//! ```
//! use options::{functional, LeakyReluOptions, MaxPool2dOptions};
//!
//! let slope: functional::LeakyReluFuncOptions = LeakyReluOptions::default().with_negative_slope(0.2);
//! assert_eq!(slope.negative_slope, 0.2);
//!
//! let pool = MaxPool2dOptions::new(3).with_padding(1);
//! assert_eq!(pool.stride, [3, 3]);
//! assert!(MaxPool2dOptions::try_new(vec![3i64, 3, 3]).is_err());
//! ```

#[macro_use]
mod macros;

pub mod activation;
pub mod attention;
pub mod config;
mod dtype;
pub mod error;
pub mod expanding;
pub mod functional;
pub mod pixelshuffle;
pub mod pooling;

pub use activation::{
    CeluOptions, EluOptions, GluOptions, HardshrinkOptions, HardtanhOptions, LeakyReluOptions,
    LogSoftmaxOptions, PreluOptions, Relu6Options, ReluOptions, RreluOptions, SeluOptions,
    SoftmaxOptions, SoftminOptions, SoftplusOptions, SoftshrinkOptions, ThresholdOptions,
};
pub use attention::MultiheadAttentionOptions;
pub use error::{OptionsError, Result};
pub use expanding::ExpandingArray;
pub use pixelshuffle::PixelShuffleOptions;
pub use pooling::{
    AdaptiveAvgPool1dOptions, AdaptiveAvgPool2dOptions, AdaptiveAvgPool3dOptions,
    AdaptiveAvgPoolOptions, AdaptiveMaxPool1dOptions, AdaptiveMaxPool2dOptions,
    AdaptiveMaxPool3dOptions, AdaptiveMaxPoolOptions, AvgPool1dOptions, AvgPool2dOptions,
    AvgPool3dOptions, AvgPoolOptions, FractionalMaxPool2dOptions, FractionalMaxPool3dOptions,
    FractionalMaxPoolOptions, LpPool1dOptions, LpPool2dOptions, LpPoolOptions, MaxPool1dOptions,
    MaxPool2dOptions, MaxPool3dOptions, MaxPoolOptions, MaxUnpool1dOptions, MaxUnpool2dOptions,
    MaxUnpool3dOptions, MaxUnpoolOptions,
};
