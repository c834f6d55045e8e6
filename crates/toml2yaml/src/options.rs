/// Extension of the files picked up by the directory walk.
pub const SOURCE_EXTENSION: &str = "toml";
/// Extension written in place of [`SOURCE_EXTENSION`].
pub const TARGET_EXTENSION: &str = "yaml";

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Leave the `.toml` file in place after a successful conversion
    /// (default: false, the source is deleted).
    pub keep_source: bool,
}
