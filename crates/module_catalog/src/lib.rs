// crates/module_catalog/src/lib.rs

//! Build-time catalog shared by the embed and clear tools.

/// Ordered (module name, source file) pairs — order matters only for the
/// determinism of log output, since each module's code block is independent.
pub const MODULES: &[(&str, &str)] = &[
    ("GMA", "gma.lua"),
    ("C", "constants.lua"),
    ("UI", "ui.lua"),
    ("XML", "ui_xml.lua"),
    ("S", "signals.lua"),
    ("O", "operators.lua"),
];

/// Default main plugin file, rewritten in place by both tools.
pub const DEFAULT_MAIN_FILE: &str = "TimeMAtricks X.lua";

/// Default directory holding one source file per module.
pub const DEFAULT_MODULES_DIR: &str = "modules";

/// Module names in catalog order, for operations that need no source file.
pub fn module_names() -> Vec<String> {
    MODULES.iter().map(|(name, _)| name.to_string()).collect()
}
