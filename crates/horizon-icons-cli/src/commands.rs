use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow, bail};
use horizon_icons::{
    ArtClient, ArtRequest, BundledTheme, IconConfig, IconProvider, IconSource, ThemeScaffold,
};
use horizon_icons_core::{DirectoryType, IconContext, IconResolver, MatchKind, ResolvedIcon};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::cli::{Command, ThemeArgs};

pub(crate) fn load_config(path: Option<&Path>) -> Result<IconConfig> {
    match path {
        Some(path) => IconConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(IconConfig::default()),
    }
}

fn apply(config: &IconConfig, args: &ThemeArgs) -> IconConfig {
    let mut config = config.clone();
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    let mut paths = args.paths.clone();
    paths.extend(config.search_paths);
    config.search_paths = paths;
    if args.no_default_paths {
        config.use_default_search_paths = false;
    }
    config
}

fn resolver(config: &IconConfig, args: &ThemeArgs) -> Result<IconResolver> {
    let config = apply(config, args);
    config
        .build_resolver()
        .with_context(|| format!("Failed to set up theme '{}'", config.theme))
}

fn describe(icon: &ResolvedIcon) -> String {
    let fit = match icon.kind {
        MatchKind::Exact => "exact".to_string(),
        MatchKind::Closest { distance } => format!("closest, {}px off", distance),
    };
    format!(
        "{} [{} {}, {}]",
        icon.path.display(),
        icon.theme,
        icon.directory.path,
        fit
    )
}

pub(crate) fn run(command: Command, config: &IconConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Find {
            name,
            theme,
            size,
            scale,
            prefer_parent,
        } => {
            let resolver = resolver(config, &theme)?;
            let scale = scale.unwrap_or(config.scale);
            let prefer = config.prefer_this_theme && !prefer_parent;
            match resolver.find_icon(&name, size, scale, prefer) {
                Some(icon) => writeln!(out, "{}", describe(&icon))?,
                None => match resolver.loader().find_standalone(&name) {
                    Some(path) => writeln!(out, "{} [standalone]", path.display())?,
                    None => bail!(
                        "Icon '{}' not found from theme '{}'",
                        name,
                        resolver.current_theme_id()
                    ),
                },
            }
        }

        Command::Themes { theme } => {
            let config = apply(config, &theme);
            let loader = config.build_loader()?;
            for id in loader.discovered_ids() {
                let bundled = if BundledTheme::from_id(id).is_some() {
                    " (bundled manifest available)"
                } else {
                    ""
                };
                writeln!(out, "{}{}", id, bundled)?;
                for path in loader.base_paths_of(id) {
                    writeln!(out, "    {}", path.display())?;
                }
            }
        }

        Command::Chain { theme } => {
            let resolver = resolver(config, &theme)?;
            let current = resolver.current_theme_id();
            for id in resolver.inheritance_chain(current) {
                let state = if resolver.loader().has_theme(&id) {
                    ""
                } else {
                    " (not installed)"
                };
                writeln!(out, "{}{}", id, state)?;
            }
        }

        Command::Icons { theme } => {
            let resolver = resolver(config, &theme)?;
            let current = resolver
                .current_theme()
                .ok_or_else(|| anyhow!("Theme '{}' is not loaded", resolver.current_theme_id()))?;
            for name in current.icon_names() {
                let sizes: Vec<String> = current.sizes_of(name).iter().map(u32::to_string).collect();
                writeln!(out, "{}\t{}", name, sizes.join(","))?;
            }
        }

        Command::Sample {
            theme,
            count,
            size,
            seed,
        } => {
            let resolver = resolver(config, &theme)?;
            let current = resolver
                .current_theme()
                .ok_or_else(|| anyhow!("Theme '{}' is not loaded", resolver.current_theme_id()))?;
            let names = current.icon_names();
            if names.is_empty() {
                bail!("Theme '{}' has no icons installed", current.id());
            }

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for name in names.choose_multiple(&mut rng, count) {
                match resolver.find_icon(name, size, config.scale, config.prefer_this_theme) {
                    Some(icon) => writeln!(out, "{}\t{}", name, describe(&icon))?,
                    None => writeln!(out, "{}\t(unresolved)", name)?,
                }
            }
        }

        Command::Art {
            id,
            theme,
            client,
            size,
        } => {
            let client = ArtClient::parse(&client)
                .ok_or_else(|| anyhow!("Unknown art client '{}'", client))?;
            let provider = apply(config, &theme).build_provider()?;

            let mut request = ArtRequest::new(&id)
                .with_client(client)
                .with_scale(config.scale);
            if let Some(size) = size {
                request = request.with_size(size);
            }

            let icon = provider
                .provide(&request)
                .ok_or_else(|| anyhow!("No art for '{}'", id))?;
            let source = match &icon.source {
                IconSource::Theme { theme, .. } => format!("theme {}", theme),
                IconSource::Standalone => "standalone".to_string(),
                IconSource::Missing { theme } => format!("missing-image placeholder from {}", theme),
            };
            writeln!(
                out,
                "{} -> {} ({}px, {}{})",
                id,
                icon.path.display(),
                icon.target_size,
                source,
                if icon.needs_resize { ", resize" } else { "" }
            )?;
        }

        Command::Scaffold {
            dir,
            name,
            comment,
            inherits,
            sizes,
            contexts,
            fixed,
            no_scalable,
        } => {
            let path = scaffold(
                &dir,
                name,
                comment,
                inherits,
                sizes,
                &contexts,
                fixed,
                !no_scalable,
            )?;
            writeln!(out, "Created {}", path.display())?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn scaffold(
    dir: &Path,
    name: String,
    comment: Option<String>,
    inherits: Vec<String>,
    sizes: Vec<u32>,
    contexts: &[String],
    fixed: bool,
    scalable: bool,
) -> Result<PathBuf> {
    let mut scaffold = ThemeScaffold::new(name)
        .with_inherits(inherits.into_iter().filter(|s| !s.is_empty()).collect())
        .with_scalable(scalable);
    if let Some(comment) = comment {
        scaffold = scaffold.with_comment(comment);
    }
    if !sizes.is_empty() {
        scaffold = scaffold.with_sizes(sizes);
    }
    if !contexts.is_empty() {
        let parsed = contexts
            .iter()
            .map(|c| IconContext::parse(c).ok_or_else(|| anyhow!("Unknown context '{}'", c)))
            .collect::<Result<Vec<_>>>()?;
        scaffold = scaffold.with_contexts(parsed);
    }
    if fixed {
        scaffold = scaffold.with_directory_type(DirectoryType::Fixed);
    }

    Ok(scaffold.write_to(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn args_for(root: &Path, theme: &str) -> ThemeArgs {
        ThemeArgs {
            theme: Some(theme.to_string()),
            paths: vec![root.to_path_buf()],
            no_default_paths: true,
        }
    }

    fn run_to_string(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run(command, &IconConfig::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scaffold_then_find() {
        let root = tempfile::tempdir().unwrap();
        let output = run_to_string(Command::Scaffold {
            dir: root.path().join("Mine"),
            name: "Mine".into(),
            comment: None,
            inherits: vec!["hicolor".into()],
            sizes: vec![16, 24],
            contexts: vec!["actions".into()],
            fixed: true,
            no_scalable: true,
        })
        .unwrap();
        assert!(output.starts_with("Created "));

        touch(&root.path().join("Mine/24x24/actions/edit-copy.png"));
        let output = run_to_string(Command::Find {
            name: "edit-copy".into(),
            theme: args_for(root.path(), "Mine"),
            size: 24,
            scale: None,
            prefer_parent: false,
        })
        .unwrap();
        assert!(output.contains("24x24/actions"));
        assert!(output.contains("exact"));

        let output = run_to_string(Command::Chain {
            theme: args_for(root.path(), "Mine"),
        })
        .unwrap();
        assert_eq!(output, "Mine\nhicolor\n");

        let output = run_to_string(Command::Icons {
            theme: args_for(root.path(), "Mine"),
        })
        .unwrap();
        assert_eq!(output, "edit-copy\t24\n");
    }

    #[test]
    fn test_find_missing_fails() {
        let root = tempfile::tempdir().unwrap();
        let err = run_to_string(Command::Find {
            name: "no-such-icon".into(),
            theme: args_for(root.path(), "Tango"),
            size: 48,
            scale: None,
            prefer_parent: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("no-such-icon"));
    }

    #[test]
    fn test_sample_is_reproducible() {
        let root = tempfile::tempdir().unwrap();
        for name in ["a", "b", "c", "d", "e"] {
            touch(&root.path().join(format!("Tango/32x32/apps/{}.png", name)));
        }
        let sample = |seed| {
            run_to_string(Command::Sample {
                theme: args_for(root.path(), "Tango"),
                count: 3,
                size: 32,
                seed: Some(seed),
            })
            .unwrap()
        };

        let first = sample(7);
        assert_eq!(first.lines().count(), 3);
        assert_eq!(first, sample(7));
    }

    #[test]
    fn test_art_unknown_client() {
        let root = tempfile::tempdir().unwrap();
        let err = run_to_string(Command::Art {
            id: "ERROR".into(),
            theme: args_for(root.path(), "hicolor"),
            client: "sidebar".into(),
            size: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("sidebar"));
    }
}
