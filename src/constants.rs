//! Centralized constants for lengths, file names, and modes.

/// Number of random bytes drawn for a fresh salt.
pub const SALT_BYTES: usize = 32;

/// Expected length of a hex-encoded salt.
pub const SALT_HEX_LEN: usize = SALT_BYTES * 2;

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// Number of leading characters shown when a salt or hash is echoed to the console.
pub const PREVIEW_LEN: usize = 20;

/// Minimum password length accepted at the prompt unless the config overrides it.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Role assigned when the operator leaves the role prompt empty.
pub const DEFAULT_ROLE: &str = "user";

/// Default file name of the data-interchange document.
pub const DATA_FILE_NAME: &str = "secure_credentials.json";

/// Default file name of the client snippet.
pub const SNIPPET_FILE_NAME: &str = "security_config.js";

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "credgen.toml";

/// Permission mode for generated artifacts. Both are meant to be published.
pub const ARTIFACT_FILE_MODE: u32 = 0o644;

/// Permission mode for an output directory created by the tool.
pub const OUTPUT_DIR_MODE: u32 = 0o755;

/// Name of the configuration object in the client snippet.
pub const SNIPPET_CONFIG_NAME: &str = "SECURITY_CONFIG";

/// Salt shared by the built-in business accounts and the deployed application.
pub const DEFAULT_SALT: &str = "c1202ec646cac69a7cbb10e2c9868561e309c93a6c1a7486f2d76514c502c534";
