use kindergarten::commands::Cli;
use kindergarten::libs::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing()?;
    Cli::menu()
}
