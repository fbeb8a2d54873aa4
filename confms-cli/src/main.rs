use clap::{Parser, Subcommand};
use confms_core::{
    ActivityGroup, ActivityRecord, AuditLogRow, BackupFile, PaginatedView, PaginationControl,
    PortalConfig, PortalError, RecordKind, RecordSummary, build_strip, filter_by_group,
    load_records, render_text, strip_text,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "confms-cli")]
#[command(about = "Browse conference portal record exports page by page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of a JSON record export
    Page {
        /// Record kind: activity, audit-log or backup
        #[arg(short, long)]
        kind: RecordKind,
        /// JSON file to read (defaults to the kind's file in the configured data directory)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Records per page (overrides the config file)
        #[arg(long)]
        per_page: Option<usize>,
        /// Activity group filter: all, paper, review or system
        #[arg(short, long, default_value = "all")]
        group: ActivityGroup,
    },
    /// Print the compressed page-number strip
    Strip {
        #[arg(long)]
        total_pages: usize,
        #[arg(long, default_value = "1")]
        current: usize,
    },
}

fn print_page<T: RecordSummary>(
    records: Vec<T>,
    kind: RecordKind,
    page: usize,
    per_page: usize,
) -> Result<(), PortalError> {
    let mut view = PaginatedView::new(records, per_page)?;
    view.set_current_page(page);
    if view.current_page() != page && view.total_pages() > 0 {
        eprintln!(
            "Page {} is out of range (1-{}), showing page {}",
            page,
            view.total_pages(),
            view.current_page()
        );
    }

    let slice = view.page();
    for (offset, record) in slice.items.iter().enumerate() {
        println!("{:>5}. {}", slice.start_index + offset + 1, record.summary());
    }

    match PaginationControl::for_page(&slice, kind.item_name()).render() {
        Some(model) => {
            println!();
            println!("{}", model.info);
            println!("{}", render_text(&model));
        }
        None => println!("No {} to show", kind.item_name()),
    }

    Ok(())
}

fn resolve_file(
    kind: RecordKind,
    file: Option<PathBuf>,
    config: &PortalConfig,
) -> Result<PathBuf, PortalError> {
    file.or_else(|| config.data_file(kind)).ok_or_else(|| {
        PortalError::Config(format!(
            "no --file given and no data_dir configured for {}",
            kind.default_file_name()
        ))
    })
}

fn run_page(
    kind: RecordKind,
    path: &Path,
    page: usize,
    per_page: usize,
    group: ActivityGroup,
) -> Result<(), PortalError> {
    log::debug!("Reading {} records from {}", kind, path.display());
    match kind {
        RecordKind::Activity => {
            let records: Vec<ActivityRecord> = load_records(path)?;
            print_page(filter_by_group(&records, group), kind, page, per_page)
        }
        RecordKind::AuditLog => {
            let rows: Vec<AuditLogRow> = load_records(path)?;
            print_page(rows, kind, page, per_page)
        }
        RecordKind::Backup => {
            let backups: Vec<BackupFile> = load_records(path)?;
            print_page(backups, kind, page, per_page)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Page {
            kind,
            file,
            page,
            per_page,
            group,
        } => {
            let config = PortalConfig::load()?;
            let path = resolve_file(kind, file, &config)?;
            let per_page = per_page.unwrap_or(config.items_per_page);

            if let Err(e) = run_page(kind, &path, page, per_page, group) {
                eprintln!("Failed to show {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        Commands::Strip {
            total_pages,
            current,
        } => {
            if total_pages == 0 {
                println!("(no pages)");
            } else {
                println!("{}", strip_text(&build_strip(current, total_pages)));
            }
        }
    }

    Ok(())
}
