//! Option records for multi-head attention.
//!
//! [`MultiheadAttentionOptions`] sizes the attention module's parameters.
//! [`MultiheadAttentionForwardFuncOptions`] carries everything the stateless
//! forward call needs, including the projection weights themselves as
//! [`Tensor`] handles. The record stores the handles it is given and never
//! copies tensor data. Checks such as `embed_dim % num_heads == 0` belong to the
//! attention implementation, not to these records.

use candle_core::Tensor;
use serde::{Deserialize, Serialize};

/// Options for the `MultiheadAttention` module.
///
/// `kdim` and `vdim` are copied from `embed_dim` when the record is built;
/// changing `embed_dim` afterwards leaves them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MultiheadAttentionSpec")]
pub struct MultiheadAttentionOptions {
    /// Total dimension of the model.
    pub embed_dim: i64,
    /// Number of parallel attention heads.
    pub num_heads: i64,
    /// Dropout probability on the attention weights. Default: 0.0
    pub dropout: f64,
    /// Add bias as a module parameter. Default: true
    pub bias: bool,
    /// Add bias to the key and value sequences at dim 0. Default: false
    pub add_bias_kv: bool,
    /// Add a new batch of zeros to the key and value sequences at dim 1.
    /// Default: false
    pub add_zero_attn: bool,
    /// Total number of features in the key. Default: `embed_dim`
    pub kdim: i64,
    /// Total number of features in the value. Default: `embed_dim`
    pub vdim: i64,
}

impl MultiheadAttentionOptions {
    pub fn new(embed_dim: i64, num_heads: i64) -> Self {
        Self {
            embed_dim,
            num_heads,
            dropout: 0.0,
            bias: true,
            add_bias_kv: false,
            add_zero_attn: false,
            kdim: embed_dim,
            vdim: embed_dim,
        }
    }

    setters! {
        with_embed_dim => embed_dim: i64,
        with_num_heads => num_heads: i64,
        with_dropout => dropout: f64,
        with_bias => bias: bool,
        with_add_bias_kv => add_bias_kv: bool,
        with_add_zero_attn => add_zero_attn: bool,
        with_kdim => kdim: i64,
        with_vdim => vdim: i64,
    }
}

#[derive(Deserialize)]
struct MultiheadAttentionSpec {
    embed_dim: i64,
    num_heads: i64,
    #[serde(default)]
    dropout: Option<f64>,
    #[serde(default)]
    bias: Option<bool>,
    #[serde(default)]
    add_bias_kv: Option<bool>,
    #[serde(default)]
    add_zero_attn: Option<bool>,
    #[serde(default)]
    kdim: Option<i64>,
    #[serde(default)]
    vdim: Option<i64>,
}

impl From<MultiheadAttentionSpec> for MultiheadAttentionOptions {
    fn from(spec: MultiheadAttentionSpec) -> Self {
        let mut options = Self::new(spec.embed_dim, spec.num_heads);
        if let Some(dropout) = spec.dropout {
            options.dropout = dropout;
        }
        if let Some(bias) = spec.bias {
            options.bias = bias;
        }
        if let Some(add_bias_kv) = spec.add_bias_kv {
            options.add_bias_kv = add_bias_kv;
        }
        if let Some(add_zero_attn) = spec.add_zero_attn {
            options.add_zero_attn = add_zero_attn;
        }
        if let Some(kdim) = spec.kdim {
            options.kdim = kdim;
        }
        if let Some(vdim) = spec.vdim {
            options.vdim = vdim;
        }
        options
    }
}

/// Options for `functional::multi_head_attention_forward`.
///
/// Handles that a given configuration may legitimately leave undefined
/// (biases, `bias_k`/`bias_v`, and `in_proj_weight` when separate q/k/v
/// projections are used) are `Option<Tensor>`.
#[derive(Debug, Clone)]
pub struct MultiheadAttentionForwardFuncOptions {
    pub embed_dim_to_check: i64,
    pub num_heads: i64,
    pub in_proj_weight: Option<Tensor>,
    pub in_proj_bias: Option<Tensor>,
    pub bias_k: Option<Tensor>,
    pub bias_v: Option<Tensor>,
    pub add_zero_attn: bool,
    pub dropout_p: f64,
    pub out_proj_weight: Tensor,
    pub out_proj_bias: Option<Tensor>,
    /// Default: true
    pub training: bool,
    pub key_padding_mask: Option<Tensor>,
    /// Default: true
    pub need_weights: bool,
    pub attn_mask: Option<Tensor>,
    /// Default: false
    pub use_separate_proj_weight: bool,
    pub q_proj_weight: Option<Tensor>,
    pub k_proj_weight: Option<Tensor>,
    pub v_proj_weight: Option<Tensor>,
    pub static_k: Option<Tensor>,
    pub static_v: Option<Tensor>,
}

impl MultiheadAttentionForwardFuncOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        embed_dim_to_check: i64,
        num_heads: i64,
        in_proj_weight: Option<Tensor>,
        in_proj_bias: Option<Tensor>,
        bias_k: Option<Tensor>,
        bias_v: Option<Tensor>,
        add_zero_attn: bool,
        dropout_p: f64,
        out_proj_weight: Tensor,
        out_proj_bias: Option<Tensor>,
    ) -> Self {
        Self {
            embed_dim_to_check,
            num_heads,
            in_proj_weight,
            in_proj_bias,
            bias_k,
            bias_v,
            add_zero_attn,
            dropout_p,
            out_proj_weight,
            out_proj_bias,
            training: true,
            key_padding_mask: None,
            need_weights: true,
            attn_mask: None,
            use_separate_proj_weight: false,
            q_proj_weight: None,
            k_proj_weight: None,
            v_proj_weight: None,
            static_k: None,
            static_v: None,
        }
    }

    setters! {
        with_embed_dim_to_check => embed_dim_to_check: i64,
        with_num_heads => num_heads: i64,
        with_add_zero_attn => add_zero_attn: bool,
        with_dropout_p => dropout_p: f64,
        with_out_proj_weight => out_proj_weight: Tensor,
        with_training => training: bool,
        with_need_weights => need_weights: bool,
        with_use_separate_proj_weight => use_separate_proj_weight: bool,
    }

    optional_setters! {
        with_in_proj_weight => in_proj_weight: Tensor,
        with_in_proj_bias => in_proj_bias: Tensor,
        with_bias_k => bias_k: Tensor,
        with_bias_v => bias_v: Tensor,
        with_out_proj_bias => out_proj_bias: Tensor,
        with_key_padding_mask => key_padding_mask: Tensor,
        with_attn_mask => attn_mask: Tensor,
        with_q_proj_weight => q_proj_weight: Tensor,
        with_k_proj_weight => k_proj_weight: Tensor,
        with_v_proj_weight => v_proj_weight: Tensor,
        with_static_k => static_k: Tensor,
        with_static_v => static_v: Tensor,
    }
}
