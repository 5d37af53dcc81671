//! Builtin preset port definition.

use crate::domain::Preset;

/// Read-only access to presets compiled into the binary.
pub trait BuiltinPresetSource {
    /// All builtin presets in declared order.
    fn builtin_presets(&self) -> &[Preset];
}
