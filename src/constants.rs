//! Constants used throughout textconvert

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["textconvert.json", "textconvert.yaml", "textconvert.yml"];

/// Directory under the root directory that holds template sources
pub const TEMPLATES_DIR: &str = "Templates";

/// Suffix carried by template source files
pub const TEMPLATE_SUFFIX: &str = ".temp";

/// Separator used in emitter template and output paths, independent of platform
pub const EMITTER_PATH_SEPARATOR: char = '/';

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
