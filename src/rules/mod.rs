//! Rules file handling.
//!
//! - [`resolver`] - Turns inputs into the list of rules files
//! - [`dependency`] - Reads `required_plugin_versions` out of rules files
//! - [`combine`] - Concatenates rules files into one document

pub mod combine;
pub mod dependency;
pub mod resolver;

pub use combine::combine_rules_files;
pub use dependency::{
    deduplicate_plugins, extract_plugin_dependencies, parse_rules_file, PluginDependency,
};
pub use resolver::{classify_input, installed_rules_files, resolve_inputs, InputKind};
