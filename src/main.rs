//! The CLI interface for rotatez
//!
//! Without a subcommand it listens to the orientation sensor until it is
//! stopped. Use the `--help` flag to see the available options.
use color_eyre::eyre::Result;
use rotatez::Orientation;
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "rotatez",
    about = "Rotates the display to follow the orientation sensor on Windows."
)]
struct Opts {
    /// Subcommand to run, defaults to `listen`
    #[structopt(subcommand)]
    cmd: Option<SubCommands>,
    /// Output debug info
    #[structopt(short, long, global = true)]
    verbose: bool,
    /// Registry key below HKEY_LOCAL_MACHINE holding the auto-rotation settings
    #[structopt(long, global = true)]
    #[cfg_attr(not(target_os = "windows"), allow(dead_code))]
    settings_key: Option<String>,
}

/// Subcommands to select the mode of operation
#[derive(StructOpt, Debug)]
enum SubCommands {
    /// Listens for orientation changes and rotates the display
    #[structopt(alias = "l")]
    Listen,
    /// Rotates the display once, honoring the auto-rotation settings
    #[structopt(alias = "a")]
    Apply {
        #[structopt(
            short,
            long,
            long_help = "The orientation to rotate to. One of: `landscape`, `portrait_flipped`, `landscape_flipped`, `portrait`, `0`, `90`, `180`, `270`"
        )]
        #[cfg_attr(not(target_os = "windows"), allow(dead_code))]
        orientation: Orientation,
    },
    /// Prints the auto-rotation settings and the current display mode
    #[structopt(alias = "s")]
    Status,
}

/// Entry point for `rotatez`.
fn main() -> Result<()> {
    let _ = color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    run(opts)
}

#[cfg(target_os = "windows")]
fn run(opts: Opts) -> Result<()> {
    use color_eyre::eyre::eyre;
    use rotatez::platforms::windows::{
        GdiDisplay, RegistryStore, WinRtSensorProvider, install_shutdown_handler,
    };
    use rotatez::{
        Applier, AutoRotationSettings, DisplayBackend, Listener, Outcome, service,
        settings::AUTO_ROTATION_KEY,
    };

    let store = RegistryStore::new(opts.settings_key.as_deref().unwrap_or(AUTO_ROTATION_KEY));
    let display = GdiDisplay::primary();

    match opts.cmd.unwrap_or(SubCommands::Listen) {
        SubCommands::Listen => {
            let listener = Listener::new();
            install_shutdown_handler(listener.sender())?;

            match service::start(&WinRtSensorProvider, store, display, listener) {
                Ok(stats) => log::info!("Stopped listening: {:?}", stats),
                Err(err) => {
                    log::error!("{}", err);
                    std::process::exit(err.exit_code());
                }
            }
        }
        SubCommands::Apply { orientation } => {
            let applier = Applier::new(store, display);
            match applier.apply(orientation)? {
                Outcome::Applied { from, to } => log::info!("Display changed from {} to {}", from, to),
                Outcome::Skipped(reason) => log::info!("Display not changed: {}", reason),
            }
        }
        SubCommands::Status => {
            let settings = AutoRotationSettings::read(&store)
                .map_err(|e| eyre!("Auto-rotation settings unavailable: {}", e))?;
            let mode = display.current_mode()?;
            println!("{}", settings);
            println!("Display: {}", mode);
        }
    }

    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn run(opts: Opts) -> Result<()> {
    log::error!(
        "No orientation sensor support on this platform, cannot run {:?}",
        opts.cmd
    );
    std::process::exit(rotatez::EXIT_NO_SENSOR);
}
