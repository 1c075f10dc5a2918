// crates/trigger-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for filter config tests.
// Purpose: Reduce duplication across integration tests for trigger-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use trigger_gate_config::FilterFileConfig;

/// Full sample configuration exercising all three categories.
pub const SAMPLE_TOML: &str = r#"
[filter]
combine = "and"

[filter.l1]
combine = "or"
error_reply = false
expressions = ["L1_SingleMu7 AND NOT L1_ETM30"]

[filter.hlt]
combine = "or"
error_reply = true
expressions = ["~HLT_Mu17_v3", "HLT_IsoMu24_v2"]

[filter.dcs]
combine = "and"
error_reply = true
expressions = ["TIBTID AND BPIX"]
"#;

/// Parses a TOML string into a `FilterFileConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<FilterFileConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<FilterFileConfig, toml::de::Error> {
    config_from_toml("")
}
