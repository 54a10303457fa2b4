//! Allow-listed, per-cartridge deviations from generic discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cartpack_config::{AssetClass, Module};
use tracing::debug;

use crate::descriptor::BundleDescriptor;
use crate::layout::CartridgeLayout;
use crate::plugins::PluginStep;

/// Variant whose vendored styles are mirrored.
const MIRROR_VARIANT: &str = "default";

/// Adds static mirroring to the style bundles of allow-listed cartridges.
///
/// A mirrored cartridge ships precompiled styles in
/// `client/default/lib/css`; they are copied to `static/default/css` as-is.
/// Membership comes only from the allow-list, never from what a cartridge
/// contains.
#[derive(Debug, Clone)]
pub struct SpecialCaseInjector {
    mirrors: BTreeSet<String>,
    cartridges_dir: PathBuf,
}

impl SpecialCaseInjector {
    pub fn new(mirrors: BTreeSet<String>, cartridges_dir: impl Into<PathBuf>) -> Self {
        Self {
            mirrors,
            cartridges_dir: cartridges_dir.into(),
        }
    }

    pub fn is_special(&self, cartridge: &str) -> bool {
        self.mirrors.contains(cartridge)
    }

    /// Apply the cartridge's special handling to `descriptor`, if it has any.
    pub fn inject(
        &self,
        module: &Module,
        class: AssetClass,
        mut descriptor: BundleDescriptor,
    ) -> BundleDescriptor {
        if class != AssetClass::Style || !self.is_special(&module.id) {
            return descriptor;
        }

        let step = mirror_step(&self.cartridges_dir, &module.id);
        debug!("Mirroring vendored styles for {}: {:?}", module.id, step);
        descriptor.add_plugin(step);
        descriptor
    }
}

fn mirror_step(cartridges_dir: &Path, cartridge: &str) -> PluginStep {
    let layout = CartridgeLayout::new(cartridges_dir, cartridge);
    PluginStep::Mirror {
        from: layout
            .client_root()
            .join(MIRROR_VARIANT)
            .join("lib")
            .join("css"),
        to: layout.static_root().join(MIRROR_VARIANT).join("css"),
    }
}
