//! Bundle entry naming.

use cartpack_config::AssetClass;

/// Logical name of one entry inside a descriptor's entry map.
pub type EntryKey = String;

/// Derive the entry key for a source file.
///
/// `relative_path` is the file's path below its variant folder. The class
/// source folder is canonicalized: styles rewrite it to the output folder
/// name (`scss` becomes `css`), scripts drop it since their output directory
/// already is the script tree. The extension is stripped and the variant is
/// prepended. Separators in the result are always `/`.
///
/// ```
/// use cartpack_bundler::{AssetClass, derive_key};
///
/// assert_eq!(
///     derive_key("default", "scss/checkout/summary.scss", AssetClass::Style),
///     "default/css/checkout/summary"
/// );
/// assert_eq!(derive_key("default", "js/main.js", AssetClass::Script), "default/main");
/// ```
pub fn derive_key(variant: &str, relative_path: &str, class: AssetClass) -> EntryKey {
    let mut segments: Vec<&str> = relative_path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    if segments.len() > 1 && segments[0] == class.source_dir() {
        match class {
            AssetClass::Style => segments[0] = class.output_dir(),
            AssetClass::Script => {
                segments.remove(0);
            }
        }
    }

    let mut key = String::from(variant);
    let last = segments.len().saturating_sub(1);
    for (index, segment) in segments.iter().enumerate() {
        key.push('/');
        if index == last {
            key.push_str(strip_extension(segment));
        } else {
            key.push_str(segment);
        }
    }
    key
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
