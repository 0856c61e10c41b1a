use clap::Parser;
use filedate::{
    app::config::Config,
    cli::{RenameCli, handler},
    file::OsFileSystem,
    util::{logging, paths},
};

fn main() {
    let cli = RenameCli::parse();

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default settings", e);
        Config::default()
    });

    let exit_code = {
        let logs_dir = paths::get_logs_dir(cli.config.as_deref()).ok();
        let _guard = logging::init_logging(cli.verbose, &config.logging, logs_dir.as_deref());
        tracing::trace!("CLI arguments: {:?}", cli);
        paths::log_config_location(cli.config.as_deref());

        handler::handle_rename(
            &cli,
            &config,
            &OsFileSystem::new(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
    };

    std::process::exit(exit_code);
}
