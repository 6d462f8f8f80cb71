use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use roikit::api::RoiKit;
use roikit::commands::{CommandFactory, RoikitCommandFactory};
use roikit::utils::logger::Logger;
use roikit::utils::warning::{LogWarningPresenter, WarningPresenter};

fn build_cli() -> ClapCommand {
    ClapCommand::new("roikit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("ROI configuration, UTM lookup and label raster utilities")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file instead of the console")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("epsg")
                .about("Print the UTM EPSG code and area of every ROI")
                .arg(Arg::new("input").help("ROI GeoJSON file").required(true).index(1)),
        )
        .subcommand(
            ClapCommand::new("config")
                .about("Create config.json and config_gdf.geojson for ROIs")
                .arg(Arg::new("input").help("ROI GeoJSON file").required(true).index(1))
                .arg(
                    Arg::new("settings")
                        .short('s')
                        .long("settings")
                        .help("Settings file (.json or .toml) with sitename and dates")
                        .value_name("FILE")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Directory receiving the config files")
                        .value_name("DIR")
                        .required(true),
                )
                .arg(
                    Arg::new("filepath")
                        .long("filepath")
                        .help("Data directory recorded for each ROI (defaults to the output directory)")
                        .value_name("DIR"),
                )
                .arg(
                    Arg::new("roi-id")
                        .long("roi-id")
                        .help("Only include the ROI with this id")
                        .value_name("ID"),
                ),
        )
        .subcommand(
            ClapCommand::new("resize")
                .about("Resize a grey-label PNG with nearest-neighbour sampling")
                .arg(Arg::new("input").help("Grey-label PNG").required(true).index(1))
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .help("Target number of rows")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .required(true),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .help("Target number of columns")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output PNG file")
                        .value_name("FILE")
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("years")
                .about("Create one directory per year")
                .arg(Arg::new("base").help("Base directory").required(true).index(1))
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("First year")
                        .value_name("YEAR")
                        .value_parser(value_parser!(i32))
                        .required(true),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .help("Last year (inclusive)")
                        .value_name("YEAR")
                        .value_parser(value_parser!(i32))
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("clean")
                .about("Remove empty directories below a root")
                .arg(Arg::new("root").help("Root directory").required(true).index(1)),
        )
        .subcommand(
            ClapCommand::new("download")
                .about("Download a file with a progress bar")
                .arg(Arg::new("url").help("URL to download").required(true).index(1))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Destination file")
                        .value_name("FILE")
                        .required(true),
                ),
        )
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(&matches);

    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    let kit = match RoiKit::new(log_file) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };
    let presenter = LogWarningPresenter::new(kit.logger());

    let factory = RoikitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                presenter.present_warning(Some("Command failed"), Some(&e.to_string()));
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            presenter.present_warning(Some("Invalid arguments"), Some(&e.to_string()));
            process::exit(1);
        }
    };
}
