use tracing::{error, info};
use user_factory::telemetry::setup_tracing;
use user_factory::user_factory::{UserError, UserFactory};

fn main() -> Result<(), UserError> {
    setup_tracing();

    let factory = UserFactory::default();
    info!(min_length = factory.validator().min_length(), "Starting user factory demo");

    match factory.create("ab") {
        Ok(user) => error!(username = user.username(), "Short username was accepted"),
        Err(e) => info!(error = %e, "Short username rejected"),
    }

    for name in ["abc", "alice"] {
        let user = factory.create(name)?;
        info!(username = user.username(), "User created successfully");
    }

    info!("Demo completed successfully");
    Ok(())
}
