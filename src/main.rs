use asn_prefixes::args::Args;
use asn_prefixes::registry::{FixedDelay, WhoisCommand};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::process::ExitCode;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// log4rs.yml from the working directory if present, otherwise stderr at info.
fn init_logging(quiet: bool) {
    if Path::new(LOG_CONFIG_FILE).exists() {
        if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
            eprintln!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}");
        }
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Info));
        match config {
            Ok(config) => {
                if let Err(e) = log4rs::init_config(config) {
                    eprintln!("Error initializing log4rs: {e}");
                }
            }
            Err(e) => eprintln!("Error building log4rs config: {e}"),
        }
    }
    if quiet {
        log::set_max_level(LevelFilter::Warn);
    }
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            // --help and --version are not errors
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(args.quiet);
    log::debug!("#Start main()");

    let result = args.into_config().and_then(|config| {
        let client = WhoisCommand::new(config.query.whois_command.clone());
        let mut gate = FixedDelay::new(config.query.throttle);
        let mut stdout = std::io::stdout().lock();
        asn_prefixes::run(&config, &client, &mut gate, &mut stdout)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(e.exit_code())
        }
    }
}
