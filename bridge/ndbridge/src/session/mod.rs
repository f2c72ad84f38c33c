//! Normalization session bound to one engine configuration.

use ndb_args::CommonType;
use ndb_index::{IndexBuilder, IndexExpression};
use ndb_types::{is_extended, is_user_defined, ElementTypeCode, EngineInfo};
use ndb_value::{ConvertResult, Value};

use crate::config::BridgeConfig;

/// Entry point for normalization against a particular engine.
///
/// `E` supplies the limits that depend on the engine: maximum rank and the
/// number of registered user types. A static [`BridgeConfig`] works for
/// most hosts; a live engine handle can implement [`EngineInfo`] directly.
#[derive(Clone, Debug)]
pub struct Bridge<E = BridgeConfig> {
    indices: IndexBuilder<E>,
}

impl<E: EngineInfo> Bridge<E> {
    pub fn new(info: E) -> Self {
        tracing::debug!(
            max_dims = info.max_dims(),
            user_types = info.user_type_count(),
            "bridge session"
        );
        Bridge {
            indices: IndexBuilder::new(info),
        }
    }

    pub fn info(&self) -> &E {
        self.indices.info()
    }

    /// Normalize subscript arguments.
    pub fn index(&self, args: &[Value]) -> ConvertResult<IndexExpression> {
        self.indices.build(args)
    }

    /// Whether `code` is a user type currently registered with the engine.
    pub fn is_user_defined(&self, code: ElementTypeCode) -> bool {
        is_user_defined(code, self.info().user_type_count())
    }

    /// Flexible-width or registered user type.
    pub fn is_extended(&self, code: ElementTypeCode) -> bool {
        is_extended(code, self.info().user_type_count())
    }

    /// Common element type of a multi-operand call.
    pub fn common_type(&self, operands: &[Value]) -> ConvertResult<CommonType> {
        ndb_args::common_type(operands)
    }
}

impl Bridge<BridgeConfig> {
    /// Session with the default engine limits.
    pub fn with_defaults() -> Self {
        Bridge::new(BridgeConfig::default())
    }
}

#[cfg(test)]
mod tests;
