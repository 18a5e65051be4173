use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{Authenticator, ConfigAuthenticator};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { user, password } = cmd {
        let authenticator = ConfigAuthenticator::new(cfg);
        let session = authenticator.authenticate(user, password)?;

        success(format!(
            "Login successful for {} (session started {}).",
            session.username, session.started_at
        ));
    }
    Ok(())
}
