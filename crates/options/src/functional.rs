//! Option types accepted by the stateless functional calls.
//!
//! When a functional call takes exactly the fields of its module, the
//! functional name is a plain type alias: `EluFuncOptions` *is* `EluOptions`
//! and values move between the two without conversion. Calls that need extra
//! inputs (an output dtype, an explicit training flag, an output size, the
//! attention weights) get their own record, re-exported here.

use crate::{activation, pixelshuffle, pooling};

pub use crate::activation::{
    GumbelSoftmaxFuncOptions, LogSoftmaxFuncOptions, RreluFuncOptions, SoftmaxFuncOptions,
    SoftminFuncOptions,
};
pub use crate::attention::MultiheadAttentionForwardFuncOptions;
pub use crate::pooling::MaxUnpoolFuncOptions;

pub type EluFuncOptions = activation::EluOptions;
pub type SeluFuncOptions = activation::SeluOptions;
pub type GluFuncOptions = activation::GluOptions;
pub type HardshrinkFuncOptions = activation::HardshrinkOptions;
pub type HardtanhFuncOptions = activation::HardtanhOptions;
pub type LeakyReluFuncOptions = activation::LeakyReluOptions;
pub type PreluFuncOptions = activation::PreluOptions;
pub type ReluFuncOptions = activation::ReluOptions;
pub type Relu6FuncOptions = activation::Relu6Options;
pub type CeluFuncOptions = activation::CeluOptions;
pub type SoftplusFuncOptions = activation::SoftplusOptions;
pub type SoftshrinkFuncOptions = activation::SoftshrinkOptions;
pub type ThresholdFuncOptions = activation::ThresholdOptions;

pub type PixelShuffleFuncOptions = pixelshuffle::PixelShuffleOptions;

pub type AvgPool1dFuncOptions = pooling::AvgPool1dOptions;
pub type AvgPool2dFuncOptions = pooling::AvgPool2dOptions;
pub type AvgPool3dFuncOptions = pooling::AvgPool3dOptions;

pub type MaxPool1dFuncOptions = pooling::MaxPool1dOptions;
pub type MaxPool2dFuncOptions = pooling::MaxPool2dOptions;
pub type MaxPool3dFuncOptions = pooling::MaxPool3dOptions;

pub type AdaptiveMaxPool1dFuncOptions = pooling::AdaptiveMaxPool1dOptions;
pub type AdaptiveMaxPool2dFuncOptions = pooling::AdaptiveMaxPool2dOptions;
pub type AdaptiveMaxPool3dFuncOptions = pooling::AdaptiveMaxPool3dOptions;

pub type AdaptiveAvgPool1dFuncOptions = pooling::AdaptiveAvgPool1dOptions;
pub type AdaptiveAvgPool2dFuncOptions = pooling::AdaptiveAvgPool2dOptions;
pub type AdaptiveAvgPool3dFuncOptions = pooling::AdaptiveAvgPool3dOptions;

pub type MaxUnpool1dFuncOptions = MaxUnpoolFuncOptions<1>;
pub type MaxUnpool2dFuncOptions = MaxUnpoolFuncOptions<2>;
pub type MaxUnpool3dFuncOptions = MaxUnpoolFuncOptions<3>;

pub type FractionalMaxPool2dFuncOptions = pooling::FractionalMaxPool2dOptions;
pub type FractionalMaxPool3dFuncOptions = pooling::FractionalMaxPool3dOptions;

pub type LpPool1dFuncOptions = pooling::LpPool1dOptions;
pub type LpPool2dFuncOptions = pooling::LpPool2dOptions;
