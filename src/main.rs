use shapekit::{init_logging, Config, Console, ConsoleOptions, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let config = Config::load_or_default()?;
    init_logging(&config.logging)?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "starting shapekit");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), ConsoleOptions::from(&config));
    console.run()?;

    Ok(())
}
