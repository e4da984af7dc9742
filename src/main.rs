use apk_index::{config, output, scan, update};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "apk-index")]
#[command(about = "Rewrite an APK download page from release artifact filenames")]
#[command(long_about = "\
Rewrite an APK download page from release artifact filenames

Your filesystem is the data source. Release artifacts live in the download
directory, named:

  {prefix}_{dev|stg}_{YYYYMMDD}_c{build}_v{major}.{minor}.{patch}_release.apk

Site structure:

  site/
  ├── config.toml              # Site config (optional)
  ├── index.html               # Template page with generated-list markers
  └── download/
      ├── app_dev_20251010_c101_v1.1.70_release.apk
      └── app_stg_20251001_c90_v1.1.60_release.apk

The template page must contain both marker pairs:

  <!-- GENERATED DEV LIST START --> ... <!-- GENERATED DEV LIST END -->
  <!-- GENERATED STG LIST START --> ... <!-- GENERATED STG LIST END -->

Each build replaces the content between the markers (markers preserved) and
rebrands the <title> and header <h1> from config. Artifacts that don't match
the naming convention are skipped and listed, never fatal; a missing or
misordered marker aborts before anything is written.

Run 'apk-index gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root directory (contains config.toml, the page, and the
    /// download directory)
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the download directory and print the manifest as JSON
    Scan,
    /// Validate artifacts and template markers without writing
    Check,
    /// Run the full pipeline: scan, render, rewrite the page in place
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.site)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.display());
            let manifest = scan::scan(&cli.site)?;
            output::print_scan_output(&manifest);
            let page = cli.site.join(&manifest.config.page);
            let template = std::fs::read_to_string(&page)?;
            update::compose_page(&template, &manifest)?;
            println!("==> {} is valid", page.display());
        }
        Command::Build => {
            println!("==> Scanning {}", cli.site.display());
            let manifest = scan::scan(&cli.site)?;
            output::print_scan_output(&manifest);

            println!("==> Updating {}", manifest.config.page);
            let report = update::update(&cli.site, &manifest)?;
            output::print_update_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
