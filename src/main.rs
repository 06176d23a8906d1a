use clap::Parser;
use summariser::api::PredictClient;
use summariser::cli::{self, Cli};
use summariser::config::Config;
use summariser::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.is_headless() {
        logging::init_stderr_tracing();
    } else {
        logging::init_tracing();
    }

    let config = cli.load_config()?;

    if cli.is_headless() {
        return run_headless(&cli, &config);
    }

    ui::run(config)
}

fn run_headless(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let request = cli.read_request()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let client = PredictClient::new(&config.api)?;
        cli::summarize_once(&client, &request).await
    })?;

    print!("{}", report);
    Ok(())
}
