pub const ENV_ITEM_ID: &str = "ITEM_ID";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
