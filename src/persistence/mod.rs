pub mod files;
pub mod parser;
pub mod preferences;
pub mod serializer;
pub mod themes;

pub use files::{absolute_path, atomic_write, ensure_dir, read_file, ConfigLocations};
pub use parser::parse_todo_file;
pub use preferences::{load_preferences, save_preferences, Preferences};
pub use serializer::serialize_todo_file;
pub use themes::load_themes;
