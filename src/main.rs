use clap::Parser;
use placeboard::Role;
use placeboard::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "placeboard", about = "Terminal dashboard for university placement management")]
struct Args {
    /// Role to open the dashboard as
    #[arg(short, long, value_enum)]
    role: Option<Role>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to placeboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("placeboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config unusable ({e}), continuing with defaults");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.role);

    log::info!(
        "Placeboard starting up as {} at {:?}",
        resolved.role,
        resolved.start_page
    );

    placeboard::tui::run(resolved)
}
