use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use registry_service::{title_case, UserRecord, UserRegistry};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEMO_USER_ID: u64 = 1;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let mut registry = UserRegistry::new();

    let user = UserRecord::new(DEMO_USER_ID, "john doe", "john@example.com");
    if !user.has_valid_email() {
        warn!(email = user.email(), "User email looks malformed");
    }
    registry.add(user);

    let user = registry
        .get(DEMO_USER_ID)
        .wrap_err("Demo user missing right after insert")?;
    info!(id = user.id(), users = registry.len(), "Registry ready");

    println!("User added: {}", title_case(user.name()));

    Ok(())
}
