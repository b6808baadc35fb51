//! End-to-end tests: configuration, bundled manifests and art providers
//! over icon files on disk.

use std::fs;
use std::path::Path;

use horizon_icons::{
    ArtClient, ArtRequest, BundledTheme, Error, IconConfig, IconProvider, IconSource,
    ProviderStack, ThemeScaffold,
};
use horizon_icons_core::MatchKind;
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Icon files for Adwaita and hicolor installed without manifests, plus a
/// standalone pixmap.
fn fixture() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let base = root.path();

    touch(&base.join("Adwaita/16x16/actions/document-open.png"));
    touch(&base.join("Adwaita/24x24/actions/document-open.png"));
    touch(&base.join("Adwaita/scalable/places/folder.svg"));
    touch(&base.join("Adwaita/48x48/status/dialog-error.png"));

    touch(&base.join("hicolor/48x48/status/image-missing.png"));
    touch(&base.join("hicolor/48x48/apps/firefox.png"));

    touch(&base.join("legacy-app.png"));
    root
}

fn config_for(root: &TempDir, theme: &str) -> IconConfig {
    IconConfig {
        theme: theme.to_string(),
        search_paths: vec![root.path().to_path_buf()],
        use_default_search_paths: false,
        ..IconConfig::default()
    }
}

#[test]
fn test_bundled_manifest_over_installed_files() {
    let root = fixture();
    let resolver = config_for(&root, "adwaita").build_resolver().unwrap();

    assert_eq!(resolver.current_theme_id(), "Adwaita");
    assert_eq!(resolver.inheritance_chain("Adwaita"), ["Adwaita", "hicolor"]);
    assert_eq!(resolver.available_sizes("document-open"), [16, 24]);

    let firefox = resolver.find_icon("firefox", 48, 1, true).unwrap();
    assert_eq!(firefox.theme, "hicolor");
}

#[test]
fn test_provider_resolves_stock_art() {
    let root = fixture();
    let provider = config_for(&root, "Adwaita").build_provider().unwrap();

    let open = provider
        .provide(&ArtRequest::new("wxART_FILE_OPEN").with_client(ArtClient::Toolbar))
        .unwrap();
    assert_eq!(open.name, "document-open");
    assert_eq!(open.target_size, 24);
    assert!(!open.needs_resize);
    assert_eq!(
        open.source,
        IconSource::Theme {
            theme: "Adwaita".into(),
            kind: MatchKind::Exact
        }
    );

    // Menu size 16 is below the scalable folder's nominal size but in range
    let folder = provider
        .provide(&ArtRequest::new("FOLDER").with_client(ArtClient::Menu))
        .unwrap();
    assert!(folder.path.ends_with("Adwaita/scalable/places/folder.svg"));
    assert!(!folder.needs_resize);

    // Only 48px exists; a toolbar needs it scaled down
    let error = provider
        .provide(&ArtRequest::new("ERROR").with_client(ArtClient::Toolbar))
        .unwrap();
    assert!(error.needs_resize);
    assert_eq!(
        error.source,
        IconSource::Theme {
            theme: "Adwaita".into(),
            kind: MatchKind::Closest { distance: 24 }
        }
    );
}

#[test]
fn test_provider_fallbacks() {
    let root = fixture();
    let provider = config_for(&root, "Adwaita").build_provider().unwrap();

    let legacy = provider.provide(&ArtRequest::new("legacy-app")).unwrap();
    assert_eq!(legacy.source, IconSource::Standalone);
    assert_eq!(legacy.path, root.path().join("legacy-app.png"));

    let missing = provider.provide(&ArtRequest::new("no-such-icon")).unwrap();
    assert!(missing.is_missing());
    assert_eq!(missing.name, "image-missing");
    assert_eq!(
        missing.source,
        IconSource::Missing {
            theme: "hicolor".into()
        }
    );
}

#[test]
fn test_provider_without_placeholder_declines() {
    let root = fixture();
    let config = IconConfig {
        missing_icon: String::new(),
        ..config_for(&root, "Adwaita")
    };
    let stack = ProviderStack::new().with(config.build_provider().unwrap());
    assert!(stack.provide(&ArtRequest::new("no-such-icon")).is_none());
}

#[test]
fn test_unknown_theme_is_an_error() {
    let root = fixture();
    let err = config_for(&root, "Nonexistent").build_resolver().unwrap_err();
    assert!(matches!(
        err,
        Error::Theme(horizon_icons_core::Error::ThemeNotFound(_))
    ));
}

#[test]
fn test_scaffolded_theme_is_discovered() {
    let root = fixture();
    ThemeScaffold::new("Mine")
        .with_sizes(vec![16, 32])
        .write_to(root.path().join("Mine"))
        .unwrap();
    touch(&root.path().join("Mine/32x32/apps/editor.png"));

    let resolver = config_for(&root, "Mine").build_resolver().unwrap();
    assert_eq!(resolver.inheritance_chain("Mine"), ["Mine", "hicolor"]);

    // Threshold directory: 32 +/- 2 covers 30
    let editor = resolver.find_icon("editor", 30, 1, true).unwrap();
    assert!(editor.is_exact());
    assert_eq!(editor.theme, "Mine");

    let firefox = resolver.find_icon("firefox", 48, 1, true).unwrap();
    assert_eq!(firefox.theme, "hicolor");
}

#[test]
fn test_config_file_round_trip() {
    let root = fixture();
    let path = root.path().join("icons.toml");
    let config = config_for(&root, "Tango");
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    let loaded = IconConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);

    // Tango has no files in the fixture but the bundled manifest still loads
    let resolver = loaded.build_resolver().unwrap();
    assert_eq!(resolver.current_theme_id(), "Tango");
    assert!(BundledTheme::Tango.locate(&[root.path().to_path_buf()]).is_empty());
}

#[test]
fn test_invalid_config_file_reports_path() {
    let root = fixture();
    let path = root.path().join("broken.toml");
    fs::write(&path, "scale = [").unwrap();

    match IconConfig::from_file(&path) {
        Err(Error::Config { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other),
    }
}
