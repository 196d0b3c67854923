use std::any::TypeId;

use candle_core::DType;
use options::functional::{
    self, AvgPool2dFuncOptions, EluFuncOptions, LeakyReluFuncOptions, MaxUnpool2dFuncOptions,
    RreluFuncOptions, SoftmaxFuncOptions,
};
use options::{
    AvgPool2dOptions, EluOptions, HardtanhOptions, LeakyReluOptions, MaxUnpool2dOptions,
    MultiheadAttentionOptions, RreluOptions, SoftmaxOptions,
};

#[test]
fn aliases_are_the_module_types() {
    assert_eq!(TypeId::of::<EluFuncOptions>(), TypeId::of::<EluOptions>());
    assert_eq!(
        TypeId::of::<functional::ThresholdFuncOptions>(),
        TypeId::of::<options::ThresholdOptions>()
    );
    assert_eq!(
        TypeId::of::<AvgPool2dFuncOptions>(),
        TypeId::of::<options::AvgPoolOptions<2>>()
    );
    assert_eq!(
        TypeId::of::<functional::PixelShuffleFuncOptions>(),
        TypeId::of::<options::PixelShuffleOptions>()
    );
}

#[test]
fn module_values_assign_directly_to_functional_names() {
    let module = LeakyReluOptions::default().with_negative_slope(0.42).with_inplace(true);
    let func: LeakyReluFuncOptions = module;
    assert_eq!(func.negative_slope, 0.42);

    let pool: AvgPool2dFuncOptions = AvgPool2dOptions::new([3, 2]).with_stride([2, 2]);
    assert_eq!(pool.stride, [2, 2]);
}

#[test]
fn functional_only_records_are_distinct_types() {
    assert_ne!(TypeId::of::<SoftmaxFuncOptions>(), TypeId::of::<SoftmaxOptions>());
    assert_ne!(TypeId::of::<RreluFuncOptions>(), TypeId::of::<RreluOptions>());
    assert_ne!(
        TypeId::of::<MaxUnpool2dFuncOptions>(),
        TypeId::of::<MaxUnpool2dOptions>()
    );

    let softmax = SoftmaxFuncOptions::new(1).with_dtype(DType::F64);
    assert_eq!(softmax.dtype, Some(DType::F64));

    let rrelu = RreluFuncOptions::default().with_training(true);
    assert!(rrelu.training);
}

#[test]
fn setters_on_different_fields_commute() {
    let a = EluOptions::default().with_alpha(42.42).with_inplace(true);
    let b = EluOptions::default().with_inplace(true).with_alpha(42.42);
    assert_eq!(a, b);

    let a = HardtanhOptions::default().with_min_val(-42.42).with_max_val(0.42);
    let b = HardtanhOptions::default().with_max_val(0.42).with_min_val(-42.42);
    assert_eq!(a, b);

    let a = AvgPool2dOptions::new(3).with_padding(1).with_ceil_mode(true);
    let b = AvgPool2dOptions::new(3).with_ceil_mode(true).with_padding(1);
    assert_eq!(a, b);

    let a = MultiheadAttentionOptions::new(20, 10).with_bias(false).with_kdim(5);
    let b = MultiheadAttentionOptions::new(20, 10).with_kdim(5).with_bias(false);
    assert_eq!(a, b);
}

#[test]
fn repeating_a_setter_is_idempotent() {
    let once = RreluOptions::default().with_lower(0.24);
    let twice = once.with_lower(0.24);
    assert_eq!(once, twice);
}
