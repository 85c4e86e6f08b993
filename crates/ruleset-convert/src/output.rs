//! Output path naming.

use std::path::PathBuf;

use ruleset_core::defaults::STRIPPED_SOURCE_EXTENSIONS;

/// Output stem: the override when given, else the source path with its
/// `.yaml` or `.list` extension removed. Other extensions are kept.
pub fn output_stem(source: &str, output: Option<&str>) -> String {
    if let Some(output) = output {
        return output.to_string();
    }
    STRIPPED_SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| source.strip_suffix(ext))
        .unwrap_or(source)
        .to_string()
}

/// `<name>-v<version>.<extension>`
pub fn artifact_path(name: &str, version: u8, extension: &str) -> PathBuf {
    PathBuf::from(format!("{name}-v{version}.{extension}"))
}
