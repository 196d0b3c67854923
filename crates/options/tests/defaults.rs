use options::functional::{
    GumbelSoftmaxFuncOptions, LogSoftmaxFuncOptions, RreluFuncOptions, SoftmaxFuncOptions,
    SoftminFuncOptions,
};
use options::{
    CeluOptions, EluOptions, GluOptions, HardshrinkOptions, HardtanhOptions, LeakyReluOptions,
    LogSoftmaxOptions, MultiheadAttentionOptions, PixelShuffleOptions, PreluOptions, Relu6Options,
    ReluOptions, RreluOptions, SeluOptions, SoftmaxOptions, SoftminOptions, SoftplusOptions,
    SoftshrinkOptions, ThresholdOptions,
};

#[test]
fn slope_and_scale_records_use_documented_defaults() {
    let elu = EluOptions::default();
    assert_eq!(elu.alpha, 1.0);
    assert!(!elu.inplace);

    let celu = CeluOptions::default();
    assert_eq!(celu.alpha, 1.0);
    assert!(!celu.inplace);

    let leaky = LeakyReluOptions::default();
    assert_eq!(leaky.negative_slope, 0.01);
    assert!(!leaky.inplace);

    let prelu = PreluOptions::default();
    assert_eq!(prelu.num_parameters, 1);
    assert_eq!(prelu.init, 0.25);

    let softplus = SoftplusOptions::default();
    assert_eq!(softplus.beta, 1.0);
    assert_eq!(softplus.threshold, 20.0);
}

#[test]
fn bounded_records_use_documented_defaults() {
    let hardtanh = HardtanhOptions::default();
    assert_eq!(hardtanh.min_val, -1.0);
    assert_eq!(hardtanh.max_val, 1.0);
    assert!(!hardtanh.inplace);

    let rrelu = RreluOptions::default();
    assert_eq!(rrelu.lower, 1.0 / 8.0);
    assert_eq!(rrelu.upper, 1.0 / 3.0);
    assert!(!rrelu.inplace);

    let rrelu = RreluFuncOptions::default();
    assert_eq!(rrelu.lower, 1.0 / 8.0);
    assert_eq!(rrelu.upper, 1.0 / 3.0);
    assert!(!rrelu.training);
    assert!(!rrelu.inplace);
}

#[test]
fn implicit_constructor_defaults_match_new() {
    assert_eq!(SeluOptions::default(), SeluOptions::new(false));
    assert_eq!(ReluOptions::default(), ReluOptions::new(false));
    assert_eq!(Relu6Options::default(), Relu6Options::new(false));
    assert_eq!(GluOptions::default(), GluOptions::new(-1));
    assert_eq!(HardshrinkOptions::default(), HardshrinkOptions::new(0.5));
    assert_eq!(SoftshrinkOptions::default(), SoftshrinkOptions::new(0.5));

    assert!(ReluOptions::new(true).inplace);
    assert_eq!(GluOptions::new(1).dim, 1);
    assert_eq!(SoftshrinkOptions::new(42.42).lambda, 42.42);
}

#[test]
fn required_values_are_stored_verbatim() {
    assert_eq!(SoftmaxOptions::new(1).dim, 1);
    assert_eq!(SoftminOptions::new(-2).dim, -2);
    assert_eq!(LogSoftmaxOptions::new(0).dim, 0);
    assert_eq!(PixelShuffleOptions::new(5).upscale_factor, 5);

    let threshold = ThresholdOptions::new(42.42, 24.24);
    assert_eq!(threshold.threshold, 42.42);
    assert_eq!(threshold.value, 24.24);
    assert!(!threshold.inplace);
}

#[test]
fn casting_dtype_is_absent_by_default() {
    assert!(SoftmaxFuncOptions::new(1).dtype.is_none());
    assert!(SoftminFuncOptions::new(1).dtype.is_none());
    assert!(LogSoftmaxFuncOptions::new(1).dtype.is_none());
}

#[test]
fn gumbel_softmax_defaults() {
    let options = GumbelSoftmaxFuncOptions::default();
    assert_eq!(options.tau, 1.0);
    assert!(!options.hard);
    assert_eq!(options.dim, -1);
}

#[test]
fn multihead_attention_defaults() {
    let options = MultiheadAttentionOptions::new(20, 10);
    assert_eq!(options.embed_dim, 20);
    assert_eq!(options.num_heads, 10);
    assert_eq!(options.dropout, 0.0);
    assert!(options.bias);
    assert!(!options.add_bias_kv);
    assert!(!options.add_zero_attn);
    assert_eq!(options.kdim, 20);
    assert_eq!(options.vdim, 20);
}
