use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::args::NewArgs;
use super::prompt::{collect_config, confirm_overwrite};
use super::tui::{miniapp_theme, print_banner, print_plan, print_success, print_summary};
use crate::config::load_config_file;
use crate::emit::{build_zip, prepare_output_dir, write_files, EmitError, OutputDir};
use crate::generate::{archive_file_name, dir_slug, plan};
use crate::types::{GeneratedFile, MiniAppConfig};

/// Where the scaffold goes when `--output` is not given. Always a direct
/// child of `base`, whatever the app name contains.
pub fn default_output(config: &MiniAppConfig, zip: bool, base: &Path) -> PathBuf {
    if zip {
        base.join(archive_file_name(&config.name))
    } else {
        base.join(dir_slug(&config.name))
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run `work` while the spinner ticks; the spinner is cleared whether or
/// not the work succeeds.
fn with_spinner<T>(pb: ProgressBar, work: impl FnOnce() -> Result<T>) -> Result<T> {
    let result = work();
    pb.finish_and_clear();
    result
}

fn already_exists(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "{} already exists (use --force to replace it)",
        path.display()
    )
}

fn write_archive(output: &Path, files: &[GeneratedFile], overwrite: bool) -> Result<()> {
    if output.exists() && !overwrite {
        return Err(already_exists(output));
    }
    let bytes = build_zip(files)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, bytes).with_context(|| format!("Failed to write {}", output.display()))
}

fn write_tree(
    output: &Path,
    files: &[GeneratedFile],
    overwrite: bool,
) -> Result<(OutputDir, usize)> {
    let prepared = match prepare_output_dir(output, overwrite) {
        Ok(prepared) => prepared,
        Err(EmitError::OutputExists(dir)) => return Err(already_exists(&dir)),
        Err(e) => return Err(e.into()),
    };
    let written = write_files(output, files)?;
    Ok((prepared, written))
}

pub fn run_new(args: &NewArgs) -> Result<()> {
    let interactive = args.config.is_none();

    let input = match &args.config {
        Some(path) => load_config_file(path)?,
        None => {
            inquire::set_global_render_config(miniapp_theme());
            print_banner();
            collect_config()?
        }
    };
    let config = input.resolve();
    let generation = plan(&config);

    if args.dry_run {
        print_plan(generation.app_type, &generation.files);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&config, args.zip, &cwd));

    // An interactive run asks before clobbering; scripted runs need --force
    let mut overwrite = args.force;
    if output.exists() && !overwrite && interactive {
        if !confirm_overwrite(&output)? {
            println!("Cancelled.");
            return Ok(());
        }
        overwrite = true;
    }

    let pb = spinner("📦 Generating Mini App...");
    if args.zip {
        with_spinner(pb, || write_archive(&output, &generation.files, overwrite))?;
        print_success(&format!(
            "Packed {} files ({} page)",
            generation.files.len(),
            generation.app_type
        ));
    } else {
        let (prepared, written) =
            with_spinner(pb, || write_tree(&output, &generation.files, overwrite))?;
        if prepared == OutputDir::Replaced {
            print_success("Replaced existing directory");
        }
        print_success(&format!(
            "Wrote {} files ({} page)",
            written, generation.app_type
        ));
    }

    print_summary(&output, args.zip);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("app.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_default_output_names() {
        let config = MiniAppConfig {
            name: "Foo Bar!".to_string(),
            ..Default::default()
        };
        let base = Path::new("/tmp/work");
        assert_eq!(
            default_output(&config, false, base),
            PathBuf::from("/tmp/work/foo-bar!")
        );
        assert_eq!(
            default_output(&config, true, base),
            PathBuf::from("/tmp/work/foo-bar.zip")
        );
    }

    #[test]
    fn test_default_output_stays_inside_base() {
        let base = Path::new("/tmp/work");
        for name in ["/", "..", "../x", "/etc", "a/../../b"] {
            let config = MiniAppConfig {
                name: name.to_string(),
                ..Default::default()
            };
            for zip in [false, true] {
                let output = default_output(&config, zip, base);
                assert_eq!(output.parent(), Some(base), "{:?} -> {:?}", name, output);
                assert!(
                    !output
                        .components()
                        .any(|c| matches!(c, std::path::Component::ParentDir)),
                    "{:?} -> {:?}",
                    name,
                    output
                );
            }
        }
    }

    #[test]
    fn test_traversal_name_with_force_keeps_siblings() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        let victim = temp.path().join("victim");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(&victim).unwrap();
        fs::write(victim.join("precious.txt"), "keep").unwrap();

        let config = MiniAppConfig {
            name: "../victim".to_string(),
            ..Default::default()
        };
        let output = default_output(&config, false, &work);
        assert_eq!(output, work.join("victim"));

        prepare_output_dir(&output, true).unwrap();
        write_files(&output, &plan(&config).files).unwrap();

        assert!(victim.join("precious.txt").exists());
        assert!(!victim.join("package.json").exists());
        assert!(work.join("victim/package.json").exists());
    }

    #[test]
    fn test_spinner_cleared_when_work_fails() {
        let pb = ProgressBar::hidden();
        let result: Result<()> = with_spinner(pb.clone(), || anyhow::bail!("zip failed"));
        assert!(result.is_err());
        assert!(pb.is_finished());

        let pb = ProgressBar::hidden();
        assert_eq!(with_spinner(pb.clone(), || Ok(3)).unwrap(), 3);
        assert!(pb.is_finished());
    }

    #[test]
    fn test_write_archive_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let files = vec![GeneratedFile::new("README.md", "# App\n")];
        let err = write_archive(&blocker.join("app.zip"), &files, false).unwrap_err();
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_run_new_writes_tree_from_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "name = \"Foo Bar\"\nneeds_transaction = true\n");
        let output = temp.path().join("out");

        run_new(&NewArgs {
            config: Some(config),
            output: Some(output.clone()),
            ..Default::default()
        })
        .unwrap();

        let page = fs::read_to_string(output.join("app/page.tsx")).unwrap();
        assert!(page.contains("<TransactionButton />"));
        assert!(output.join("public/.well-known/farcaster.json").exists());
    }

    #[test]
    fn test_run_new_refuses_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "name = \"Foo\"\n");
        let output = temp.path().join("out");
        fs::create_dir_all(&output).unwrap();

        let args = NewArgs {
            config: Some(config),
            output: Some(output.clone()),
            ..Default::default()
        };
        assert!(run_new(&args).is_err());

        run_new(&NewArgs {
            force: true,
            ..args
        })
        .unwrap();
        assert!(output.join("package.json").exists());
    }

    #[test]
    fn test_run_new_zip() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "name = \"Zip Me\"\n");
        let output = temp.path().join("zip-me.zip");

        run_new(&NewArgs {
            config: Some(config),
            output: Some(output.clone()),
            zip: true,
            ..Default::default()
        })
        .unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "name = \"Dry\"\n");
        let output = temp.path().join("dry");

        run_new(&NewArgs {
            config: Some(config),
            output: Some(output.clone()),
            dry_run: true,
            ..Default::default()
        })
        .unwrap();

        assert!(!output.exists());
    }
}
