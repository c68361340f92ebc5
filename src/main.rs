use chrono::Local;
use clap::{Parser, Subcommand};
use figdex::{config, generate, output, rename, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figdex")]
#[command(about = "Static index generator for Plotly figure archives")]
#[command(long_about = "\
Static index generator for Plotly figure archives

Your filesystem is the data source. First-level directories under the data
root are categories; the Plotly .html files inside each become the linked
figures.

Data structure:

  data/
  ├── config.toml                  # Site text + descriptions (optional)
  ├── bp_nk_sync/                  # Category
  │   ├── index.html               # Generated listing page (overwritten)
  │   ├── hr_sync_story.html       # Figure
  │   └── eda_timeline_presync.html
  └── emp_vs_bp/                   # Category with no figures yet

'figdex build' writes one listing page per category plus a root index.html
next to the data directory. 'figdex check' prints what would be indexed
without writing. 'figdex rename --dry-run' previews the anonymizing rename
scheme before applying it.")]
#[command(version)]
struct Cli {
    /// Data directory holding category subdirectories
    #[arg(long, default_value = config::DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the root index and every category listing page
    Build,
    /// Scan the data directory and print what would be indexed
    Check,
    /// Rename page files to the anonymized sequential scheme
    Rename(RenameArgs),
}

#[derive(clap::Args, Clone)]
struct RenameArgs {
    /// Preview the old → new mapping without touching any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let manifest = scan::scan(&cli.data_dir)?;
            let today = Local::now().date_naive();
            let report = generate::generate(&manifest, &cli.data_dir, today)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let manifest = scan::scan(&cli.data_dir)?;
            output::print_scan_output(&manifest);
        }
        Command::Rename(args) => {
            let mappings = rename::plan(&cli.data_dir)?;
            rename::apply(&mappings, args.dry_run)?;
        }
    }

    Ok(())
}
