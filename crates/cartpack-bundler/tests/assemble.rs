//! End-to-end descriptor generation against real project trees.

use cartpack_bundler::{BuildMode, Error, ManifestDiscovery, PluginStep, generate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();
    path
}

fn write_manifest(root: &Path, body: &str) {
    fs::write(root.join("package.json"), body).unwrap();
}

fn storefront() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "cartridges/core_theme/cartridge/client/default/js/main.js");
    touch(root, "cartridges/checkout_addon/cartridge/client/default/js/checkout.js");
    touch(root, "cartridges/checkout_addon/cartridge/client/default/scss/checkout.scss");
    write_manifest(
        root,
        r#"{ "name": "storefront", "cartridges": ["core_theme", "checkout_addon"] }"#,
    );
    dir
}

#[test]
fn two_cartridge_storefront() {
    let dir = storefront();
    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();

    let descriptors = generate(&manifest, BuildMode::Development).unwrap();
    let names: Vec<_> = descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        ["core_theme:script", "checkout_addon:script", "checkout_addon:style"]
    );

    let core_js = &descriptors[0];
    assert_eq!(core_js.entry.len(), 1);
    assert!(core_js.entry["default/main"].ends_with("default/js/main.js"));

    let checkout_js = &descriptors[1];
    assert!(checkout_js.entry["default/checkout"].ends_with("js/checkout.js"));

    let checkout_css = &descriptors[2];
    assert_eq!(checkout_css.entry.len(), 1);
    assert!(checkout_css.entry["default/css/checkout"].ends_with("scss/checkout.scss"));
    assert!(
        checkout_css
            .output
            .path
            .ends_with("checkout_addon/cartridge/static/css")
    );
}

#[test]
fn script_only_cartridge_yields_one_descriptor() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "cartridges/app_core/cartridge/client/default/js/a.js");
    touch(dir.path(), "cartridges/app_core/cartridge/client/default/js/nested/b.js");
    write_manifest(dir.path(), r#"{ "cartridges": ["app_core"] }"#);

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let descriptors = generate(&manifest, BuildMode::Production).unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].name, "app_core:script");
    assert_eq!(
        descriptors[0].entry.keys().collect::<Vec<_>>(),
        ["default/a", "default/nested/b"]
    );
}

#[test]
fn missing_client_root_aborts_everything() {
    let dir = storefront();
    write_manifest(
        dir.path(),
        r#"{ "cartridges": ["core_theme", "ghost", "checkout_addon"] }"#,
    );

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let err = generate(&manifest, BuildMode::Development).unwrap_err();

    match err {
        Error::MissingModuleRoot { cartridge, path } => {
            assert_eq!(cartridge, "ghost");
            assert!(path.ends_with("cartridges/ghost/cartridge/client"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generation_is_idempotent() {
    let dir = storefront();
    touch(
        dir.path(),
        "cartridges/core_theme/cartridge/client/en_GB/js/locale.js",
    );
    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();

    let first = generate(&manifest, BuildMode::Production).unwrap();
    let second = generate(&manifest, BuildMode::Production).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn script_aliases_reach_every_script_descriptor() {
    let dir = storefront();
    write_manifest(
        dir.path(),
        r#"{
            "cartridges": ["core_theme", "checkout_addon"],
            "aliasJS": { "foo": "./shared/foo.js" }
        }"#,
    );

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let expected = manifest.root().join("shared/foo.js");
    let descriptors = generate(&manifest, BuildMode::Development).unwrap();

    for descriptor in &descriptors {
        match descriptor.asset_class {
            cartpack_bundler::AssetClass::Script => {
                assert_eq!(descriptor.resolve.alias["foo"], expected);
                assert!(descriptor.resolve.alias["foo"].is_absolute());
            }
            cartpack_bundler::AssetClass::Style => {
                assert!(descriptor.resolve.alias.is_empty());
            }
        }
    }
}

#[test]
fn mirroring_only_for_allow_listed_cartridge() {
    let dir = TempDir::new().unwrap();
    for cartridge in ["bm_smartorderrefill", "app_lookalike"] {
        touch(
            dir.path(),
            &format!("cartridges/{cartridge}/cartridge/client/default/scss/main.scss"),
        );
        touch(
            dir.path(),
            &format!("cartridges/{cartridge}/cartridge/client/default/lib/css/vendor.css"),
        );
    }
    write_manifest(
        dir.path(),
        r#"{
            "cartridges": ["bm_smartorderrefill", "app_lookalike"],
            "staticMirrors": ["bm_smartorderrefill"]
        }"#,
    );

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let descriptors = generate(&manifest, BuildMode::Development).unwrap();
    assert_eq!(descriptors.len(), 2);

    let mirrored = &descriptors[0];
    assert_eq!(mirrored.cartridge, "bm_smartorderrefill");
    let Some(PluginStep::Mirror { from, to }) = mirrored.plugins.steps().last() else {
        panic!("expected a mirror step, got {:?}", mirrored.plugins.names());
    };
    assert!(from.ends_with("bm_smartorderrefill/cartridge/client/default/lib/css"));
    assert!(to.ends_with("bm_smartorderrefill/cartridge/static/default/css"));

    let lookalike = &descriptors[1];
    assert_eq!(lookalike.cartridge, "app_lookalike");
    assert!(!lookalike.plugins.contains("mirror"));
}

#[test]
fn colliding_entry_keys_fail_the_run() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "cartridges/app_core/cartridge/client/default/js/widget.js");
    touch(dir.path(), "cartridges/app_core/cartridge/client/default/js/widget.jsx");
    write_manifest(dir.path(), r#"{ "cartridges": ["app_core"] }"#);

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let err = generate(&manifest, BuildMode::Development).unwrap_err();
    assert!(matches!(err, Error::EntryKeyCollision { ref key, .. } if key == "default/widget"));
}

#[test]
fn malformed_cartridge_list_fails_before_discovery() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), r#"{ "cartridges": { "app_core": true } }"#);

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let err = generate(&manifest, BuildMode::Development).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn cartridge_outside_project_is_rejected() {
    let dir = storefront();
    let outside = TempDir::new().unwrap();
    touch(outside.path(), "cartridge/client/default/js/main.js");
    let manifest_body = serde_json::json!({
        "cartridges": ["core_theme", outside.path()]
    });
    write_manifest(dir.path(), &manifest_body.to_string());

    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let err = generate(&manifest, BuildMode::Development).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "unexpected error: {err}");
}

#[test]
fn descriptor_json_shape() {
    let dir = storefront();
    let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
    let descriptors = generate(&manifest, BuildMode::Production).unwrap();

    let value = serde_json::to_value(&descriptors[2]).unwrap();
    assert_eq!(value["name"], "checkout_addon:style");
    assert_eq!(value["assetClass"], "style");
    assert_eq!(value["mode"], "production");
    assert_eq!(value["devtool"], false);
    assert_eq!(value["output"]["filename"], "[name].js");
    assert_eq!(value["module"]["rules"][0]["test"], r"\.s[ac]ss$");
    assert_eq!(value["plugins"][0]["plugin"], "clean");
    assert_eq!(value["plugins"][1]["plugin"], "extract-css");
    assert_eq!(value["optimization"]["minimizer"][0]["minimizer"], "css-minimizer");
}
