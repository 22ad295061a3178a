//! Codec configuration

use crate::error::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};

/// Codec configuration
///
/// Serializable so a host application can carry it in its own config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest length determinant accepted while decoding
    pub max_length: usize,
}

impl CodecConfig {
    /// Check that the configuration can be used by a codec
    pub fn validate(&self) -> CodecResult<()> {
        if self.max_length == 0 {
            return Err(CodecError::InvalidLength(
                "max_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_length: isize::MAX as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CodecConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_length, isize::MAX as usize);
    }

    #[test]
    fn test_zero_max_length_rejected() {
        let config = CodecConfig { max_length: 0 };
        assert!(config.validate().is_err());
    }
}
