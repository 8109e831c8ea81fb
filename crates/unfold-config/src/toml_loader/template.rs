//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Unfold Tutor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[tutor]
# model = "gemini-3-pro-preview"
# temperature = 0.7           # 0.0-2.0
# max_output_tokens = 8192    # 1-65536, unset = model default
# instructions_file = "persona.md"   # replaces the built-in tutor persona

[provider]
# Checked in order on every request; the first non-empty value is used.
# api_key_env = ["GEMINI_API_KEY", "API_KEY"]
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10   # 1-120
# request_timeout_secs = 120  # 1-600

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
}
