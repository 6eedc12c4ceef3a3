use cidr_merge::cli::Cli;
use cidr_merge::config::Config;
use cidr_merge::logging::init_logging;
use cidr_merge::output::{log_summary, render};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse_args();
    let config = Config::from_env()?.with_format(cli.format);
    init_logging(&config.log_config);
    //
    log::info!("#Start main()");
    log::debug!("config: {:?}", config);

    let cidrs = cli.command.run()?;
    log_summary(&cidrs);
    print!("{}", render(&cidrs, config.format)?);

    Ok(())
}
