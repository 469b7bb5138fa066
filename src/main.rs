use anyhow::Result;
use todoterm::config::Config;
use todoterm::constants::{ENV_USER_ID, ERROR_NO_USER_ID};
use todoterm::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if !config.has_user_id() {
        eprintln!("{}", ERROR_NO_USER_ID);

        let config_path = Config::get_default_config_path()?;
        if !config_path.exists() {
            Config::generate_default_config(&config_path)?;
        }

        eprintln!("\n💡 To use this app:");
        eprintln!("1. Set `user_id` in the [api] section of {}", config_path.display());
        eprintln!("2. Or export it for this shell: export {}=<your id>", ENV_USER_ID);
        eprintln!("3. Run the app again to see your todos!");
        return Ok(());
    }

    if let Some(path) = logger::init_file_logging(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
