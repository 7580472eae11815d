//! Default values shared by the settings types.

/// Formatter used when the settings carry no entry for a language.
pub const DEFAULT_FORMATTER: &str = "prettier";

/// Marker that disables formatting for a language.
pub const NO_FORMATTER: &str = "none";

/// Tag provider enabled by the default settings.
pub const DEFAULT_TAG_PROVIDER: &str = "html5";

/// Indentation width used when the host does not provide one.
pub const DEFAULT_TAB_SIZE: u32 = 2;

pub(crate) const fn default_tab_size() -> u32 {
    DEFAULT_TAB_SIZE
}
