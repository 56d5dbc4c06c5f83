use clap::Parser;
use pagerange::core::config::{self, CliOverrides};
use pagerange::core::state::Pager;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pagerange", about = "Numbered pagination bar for the terminal")]
struct Args {
    /// Total number of pages
    #[arg(short, long)]
    total: usize,

    /// Page to start on (1-based)
    #[arg(short, long, default_value_t = 1)]
    current: usize,

    /// Pages always shown at each end
    #[arg(long)]
    margin_pages: Option<usize>,

    /// Pages shown around the current page (at least 2)
    #[arg(long)]
    center_pages: Option<usize>,

    /// Glyph for hidden page runs
    #[arg(long)]
    ellipsis: Option<String>,

    /// Print the page bar once and exit instead of opening the pager
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let overrides = CliOverrides {
        margin_pages: args.margin_pages,
        center_pages: args.center_pages,
        ellipsis: args.ellipsis.clone(),
    };
    let resolved = match config::resolve(&file_config, &overrides) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize file logger - writes to pagerange.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pagerange.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "pagerange starting: page {} of {}, budget {:?}",
        args.current,
        args.total,
        resolved.budget
    );

    if args.print {
        return match pagerange::compute_range(args.current, args.total, resolved.budget) {
            Ok(range) => {
                println!("{}", range.to_text(&resolved.ellipsis));
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::warn!("Cannot print page bar: {}", e);
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let pager = Pager::from_config(args.current, args.total, &resolved);
    match pagerange::tui::run(pager) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
