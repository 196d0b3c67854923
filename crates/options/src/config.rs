//! Loading option records from configuration files.
//!
//! Any record implementing `Deserialize` can be read from TOML or JSON.
//! Omitted fields take their documented defaults, derived defaults (such as a
//! pooling stride) follow the fields they are derived from, and per-dimension
//! fields accept either a scalar or a list of exactly `D` values.
//!
//! ```
//! use options::{config, MaxPool2dOptions};
//!
//! let pool: MaxPool2dOptions = config::from_toml_str("kernel_size = [3, 2]")?;
//! assert_eq!(pool.stride, [3, 2]);
//! # Ok::<(), options::OptionsError>(())
//! ```

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::error::{OptionsError, Result};

/// Reads a record from `path`, choosing the format from the file extension.
///
/// `.json` is parsed as JSON; `.toml`, `.tml` or no extension as TOML.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    log::debug!("loading layer options from {}", path.display());
    let contents = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&contents),
        Some("toml") | Some("tml") | None => from_toml_str(&contents),
        Some(other) => Err(OptionsError::Format(format!(
            "unsupported options file extension '{}'",
            other
        ))),
    }
}

pub fn from_toml_str<T: DeserializeOwned>(contents: &str) -> Result<T> {
    Ok(toml::from_str(contents)?)
}

pub fn from_json_str<T: DeserializeOwned>(contents: &str) -> Result<T> {
    Ok(serde_json::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{functional::SoftmaxFuncOptions, EluOptions, MultiheadAttentionOptions};
    use candle_core::DType;

    #[test]
    fn toml_fills_in_defaults() -> Result<()> {
        let elu: EluOptions = from_toml_str("inplace = true")?;
        assert_eq!(elu, EluOptions::default().with_inplace(true));

        let softmax: SoftmaxFuncOptions = from_toml_str("dim = 1\ndtype = \"float32\"")?;
        assert_eq!(softmax.dtype, Some(DType::F32));
        Ok(())
    }

    #[test]
    fn missing_required_fields_are_format_errors() {
        let err = from_json_str::<MultiheadAttentionOptions>(r#"{"embed_dim": 8}"#).unwrap_err();
        assert!(matches!(err, OptionsError::Format(_)));
        assert!(err.to_string().contains("num_heads"));
    }
}
