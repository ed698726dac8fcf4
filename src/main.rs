use anyhow::Result;
use auth_tui::app::App;
use auth_tui::config::Config;
use clap::{crate_description, crate_name, crate_version, App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Uses this auth service URL for the current run")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.set_api_url(api_url)?;
    }

    App::start(config).await?;
    Ok(())
}
