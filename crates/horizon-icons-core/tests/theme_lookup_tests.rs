//! Integration tests for discovering and resolving themes on disk.

use std::fs;
use std::path::Path;

use horizon_icons_core::{
    DirectoryType, Error, IconFormat, IconResolver, IconTheme, IconThemeLoader, MatchKind,
};
use tempfile::TempDir;

const HICOLOR_INDEX: &str = "\
[Icon Theme]
Name=Hicolor
Comment=Fallback icon theme
Hidden=true
Directories=16x16/apps,32x32/apps,48x48/apps,scalable/apps

[16x16/apps]
Size=16
Context=Applications
Type=Threshold

[32x32/apps]
Size=32
Context=Applications
Type=Threshold

[48x48/apps]
Size=48
Context=Applications
Type=Threshold

[scalable/apps]
MinSize=1
Size=128
MaxSize=256
Context=Applications
Type=Scalable
";

const CUSTOM_INDEX: &str = "\
[Icon Theme]
Name=Custom
Comment=Test theme
Inherits=hicolor
Directories=16x16/actions,24x24/actions,scalable/actions

[16x16/actions]
Size=16
Context=Actions
Type=Fixed

[24x24/actions]
Size=24
Context=Actions
Type=Fixed

[scalable/actions]
Size=16
MinSize=8
MaxSize=512
Context=Actions
Type=Scalable
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

/// Two search paths: `user/` holds part of Custom, `system/` holds the rest
/// plus hicolor, and a standalone icon sits in `pixmaps/`.
fn fixture() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let user = root.path().join("user");
    let system = root.path().join("system");

    fs::create_dir_all(system.join("Custom")).unwrap();
    fs::write(system.join("Custom/index.theme"), CUSTOM_INDEX).unwrap();
    touch(&system.join("Custom/16x16/actions/edit-copy.png"));
    touch(&system.join("Custom/24x24/actions/edit-copy.png"));
    touch(&system.join("Custom/scalable/actions/edit-cut.svg"));
    touch(&system.join("Custom/16x16/actions/readme.txt"));

    // User copy has no index.theme but shadows a system icon
    touch(&user.join("Custom/16x16/actions/edit-copy.svg"));
    touch(&user.join("Custom/24x24/actions/edit-paste.png"));

    fs::create_dir_all(system.join("hicolor")).unwrap();
    fs::write(system.join("hicolor/index.theme"), HICOLOR_INDEX).unwrap();
    touch(&system.join("hicolor/48x48/apps/firefox.png"));
    touch(&system.join("hicolor/32x32/apps/firefox.png"));
    touch(&system.join("hicolor/scalable/apps/firefox.svg"));
    touch(&system.join("hicolor/16x16/apps/edit-paste.png"));

    touch(&root.path().join("pixmaps/legacy-app.xpm"));

    // A directory without an index is not a theme
    fs::create_dir_all(system.join("not-a-theme/16x16")).unwrap();

    root
}

fn loader_for(root: &TempDir) -> IconThemeLoader {
    IconThemeLoader::with_paths(vec![
        root.path().join("user"),
        root.path().join("system"),
        root.path().join("pixmaps"),
    ])
}

#[test]
fn test_discover_themes() {
    init_tracing();
    let root = fixture();
    let mut loader = loader_for(&root);

    assert_eq!(loader.discover_themes().unwrap(), 2);
    assert_eq!(loader.discovered_ids(), ["Custom", "hicolor"]);
    assert!(!loader.is_discovered("not-a-theme"));
    assert_eq!(
        loader.base_paths_of("Custom"),
        [
            root.path().join("user/Custom"),
            root.path().join("system/Custom"),
        ]
    );
}

#[test]
fn test_load_theme_merges_base_paths() {
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    let theme = loader.load_theme("Custom").unwrap();
    assert_eq!(theme.name(), "Custom");
    assert_eq!(theme.inherits(), ["hicolor"]);
    assert_eq!(theme.directories().len(), 3);
    assert_eq!(theme.icon_names(), ["edit-copy", "edit-cut", "edit-paste"]);
    // readme.txt is not an icon
    assert_eq!(theme.icon_count(), 4);
}

#[test]
fn test_earlier_search_path_shadows_later() {
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    let theme = loader.load_theme("Custom").unwrap();
    let icon = theme.lookup_icon("edit-copy", 16, 1).unwrap();
    assert_eq!(icon.format, IconFormat::Svg);
    assert_eq!(
        icon.path,
        root.path().join("user/Custom/16x16/actions/edit-copy.svg")
    );
}

#[test]
fn test_load_with_parents_brings_in_hicolor() {
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    loader.load_theme_with_parents("Custom").unwrap();
    assert!(loader.has_theme("Custom"));
    assert!(loader.has_theme("hicolor"));
}

#[test]
fn test_resolve_through_chain() {
    init_tracing();
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    let mut resolver = IconResolver::with_loader(loader);
    resolver.set_theme("Custom").unwrap();
    assert_eq!(resolver.inheritance_chain("Custom"), ["Custom", "hicolor"]);

    // Scalable directory covers 8..=512
    let cut = resolver.find_icon("edit-cut", 64, 1, true).unwrap();
    assert_eq!(cut.directory.directory_type, DirectoryType::Scalable);
    assert!(cut.is_exact());
    assert!(!cut.needs_resize(64, 1));

    // Only hicolor has firefox; 30 is inside the 32 threshold band
    let firefox = resolver.find_icon("firefox", 30, 1, true).unwrap();
    assert_eq!(firefox.theme, "hicolor");
    assert_eq!(firefox.directory.size, 32);
    assert!(firefox.needs_resize(30, 1));

    // 48x48 is nominal, scalable also encloses it; the nominal size wins
    let firefox = resolver.find_icon("firefox", 48, 1, true).unwrap();
    assert_eq!(firefox.format, IconFormat::Png);
    assert_eq!(firefox.directory.size, 48);
}

#[test]
fn test_prefer_this_theme_against_disk_themes() {
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    let mut resolver = IconResolver::with_loader(loader);
    resolver.set_theme("Custom").unwrap();

    // Custom has edit-paste at 24 only; hicolor has it at 16.
    let local = resolver.find_icon("edit-paste", 16, 1, true).unwrap();
    assert_eq!(local.theme, "Custom");
    assert_eq!(local.kind, MatchKind::Closest { distance: 8 });

    let parent = resolver.find_icon("edit-paste", 16, 1, false).unwrap();
    assert_eq!(parent.theme, "hicolor");
    assert!(parent.is_exact());
}

#[test]
fn test_missing_icon_is_none() {
    let root = fixture();
    let mut loader = loader_for(&root);
    loader.discover_themes().unwrap();

    let mut resolver = IconResolver::with_loader(loader);
    resolver.set_theme("Custom").unwrap();
    assert!(resolver.find_icon("does-not-exist", 16, 1, true).is_none());
    assert!(resolver.find_icon("does-not-exist", 16, 1, false).is_none());
}

#[test]
fn test_standalone_icons() {
    let root = fixture();
    let loader = loader_for(&root);
    assert_eq!(
        loader.find_standalone("legacy-app"),
        Some(root.path().join("pixmaps/legacy-app.xpm"))
    );
    assert_eq!(loader.find_standalone("firefox"), None);
}

#[test]
fn test_load_theme_directly() {
    let root = fixture();
    let theme = IconTheme::load(root.path().join("system/hicolor")).unwrap();
    assert_eq!(theme.id(), "hicolor");
    assert!(theme.index().hidden);
    assert_eq!(theme.sizes_of("firefox"), [32, 48, 128]);
}

#[test]
fn test_load_theme_without_index_fails() {
    let root = fixture();
    let err = IconTheme::load(root.path().join("system/not-a-theme")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

fn minimal_index(name: &str, inherits: &str) -> String {
    format!(
        "[Icon Theme]\nName={}\nInherits={}\nDirectories=16x16/apps\n\n[16x16/apps]\nSize=16\nType=Fixed\n",
        name, inherits
    )
}

#[test]
fn test_set_theme_loads_every_ancestor_of_a_loaded_theme() {
    init_tracing();
    let root = tempfile::tempdir().unwrap();
    let themes = [
        ("Mine", "gnome"),
        ("gnome", "Adwaita"),
        ("Adwaita", "hicolor"),
        ("hicolor", ""),
    ];
    for (name, inherits) in themes {
        fs::create_dir_all(root.path().join(name)).unwrap();
        fs::write(
            root.path().join(name).join("index.theme"),
            minimal_index(name, inherits),
        )
        .unwrap();
    }
    touch(&root.path().join("Adwaita/16x16/apps/only-adwaita.png"));

    let mut loader = IconThemeLoader::with_paths(vec![root.path().to_path_buf()]);
    loader.discover_themes().unwrap();
    loader.load_theme("Mine").unwrap();

    let mut resolver = IconResolver::with_loader(loader);
    resolver.set_theme("Mine").unwrap();
    assert_eq!(
        resolver.inheritance_chain("Mine"),
        ["Mine", "gnome", "Adwaita", "hicolor"]
    );
    for id in ["gnome", "Adwaita", "hicolor"] {
        assert!(resolver.loader().has_theme(id), "{} not loaded", id);
    }

    let icon = resolver.find_icon("only-adwaita", 16, 1, true).unwrap();
    assert_eq!(icon.theme, "Adwaita");
}
