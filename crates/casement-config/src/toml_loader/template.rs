//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[store]
# backend = "file"            # file, memory
# dir = "/path/to/shared/dir" # defaults to <data dir>/casement/store
# skip_empty_registry = false  # true keeps the last window's entry

[store.keys]
# counter = "lastID"
# registry = "browsers"
# shared_state = "infos3d"

[watch]
# poll_interval_ms = 250      # 10-60000

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
