pub mod config;
pub mod location;
pub mod map_comment;
pub mod map_path;
pub mod overrides;
pub mod path_utils;
pub mod source_root;
pub mod sources;

pub use config::{ConfigError, ResolverConfig};
pub use location::{classify, file_url_to_path, is_absolute_local_path, is_url, Location};
pub use map_comment::{extract_map_fields, find_map_field};
pub use map_path::resolve_map_path;
pub use overrides::{apply_source_map_path_overrides, resolve_web_root_pattern, OverrideTable};
pub use source_root::get_computed_source_root;
pub use sources::{get_full_source_entry, resolve_source_entries};
