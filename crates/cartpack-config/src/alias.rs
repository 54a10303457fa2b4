//! Per-class import aliases.

use std::collections::BTreeMap;
use std::path::PathBuf;

use path_clean::PathClean;

use crate::asset::AssetClass;
use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;

/// Logical import name mapped to an absolute path.
pub type AliasTable = BTreeMap<String, PathBuf>;

pub struct AliasResolver<'a> {
    manifest: &'a Manifest,
}

impl<'a> AliasResolver<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Read the alias map for `class` and resolve every target against the
    /// project root.
    ///
    /// Returns an empty table when the manifest has no map for the class.
    pub fn resolve_aliases(&self, class: AssetClass) -> Result<AliasTable> {
        let field = class.alias_field();
        let Some(value) = self.manifest.field(field) else {
            return Ok(AliasTable::new());
        };

        let entries = value
            .as_object()
            .ok_or_else(|| ConfigError::invalid(field, "expected a map of alias to path"))?;

        let mut table = AliasTable::new();
        for (name, target) in entries {
            let target = target.as_str().ok_or_else(|| {
                ConfigError::invalid(field, format!("alias '{}' must map to a string path", name))
            })?;
            table.insert(name.clone(), self.manifest.root().join(target).clean());
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn resolves_relative_targets_against_root() {
        let manifest = Manifest::from_value(
            "/srv/shop",
            json!({
                "aliasJS": { "base": "./cartridges/app_storefront_base/cartridge/client/default/js" },
                "aliasCSS": { "theme": "shared/../styles" }
            }),
        )
        .unwrap();
        let resolver = AliasResolver::new(&manifest);

        let js = resolver.resolve_aliases(AssetClass::Script).unwrap();
        assert_eq!(
            js["base"],
            Path::new("/srv/shop/cartridges/app_storefront_base/cartridge/client/default/js")
        );

        let css = resolver.resolve_aliases(AssetClass::Style).unwrap();
        assert_eq!(css["theme"], Path::new("/srv/shop/styles"));
    }

    #[test]
    fn absent_map_yields_empty_table() {
        let manifest = Manifest::from_value("/srv/shop", json!({})).unwrap();
        let table = AliasResolver::new(&manifest)
            .resolve_aliases(AssetClass::Style)
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_string_target_is_rejected() {
        let manifest =
            Manifest::from_value("/srv/shop", json!({ "aliasJS": { "foo": 1 } })).unwrap();
        let err = AliasResolver::new(&manifest)
            .resolve_aliases(AssetClass::Script)
            .unwrap_err();
        assert_eq!(err.field(), Some("aliasJS"));
    }
}
