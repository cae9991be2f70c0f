//! Constants used throughout the larder application

/// Default directory recipes are stored in (tilde-expanded at startup)
pub const DEFAULT_RECIPE_DIR: &str = "~/recipes";

/// Extension of recipe files on disk
pub const RECIPE_FILE_EXTENSION: &str = "json";

/// Fields every stored recipe document must carry
pub const REQUIRED_FIELDS: &[&str] = &["name", "ingredients", "steps"];

/// Fixed tag vocabularies, one per category
pub mod tags {
    pub const MEAL: &[&str] = &["breakfast", "lunch", "dinner"];
    pub const GENRE: &[&str] = &["american", "italian", "mexican", "asian", "indian", "misc"];
    pub const COMPLEXITY: &[&str] = &["simple", "intermediate", "complicated"];
    pub const COURSE: &[&str] = &["appetizer", "salad", "side", "main", "dessert"];
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
