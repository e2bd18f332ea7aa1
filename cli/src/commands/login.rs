//! Login command implementation.

use anyhow::{Context as _, Result};
use inquire::Text;
use sustaingo_business::auth;
use tracing::{error, info, instrument};

use crate::context::CliContext;

#[instrument(skip_all, name = "login")]
pub async fn run_login(ctx: &mut CliContext, email: Option<String>) -> Result<()> {
    ctx.out.header("Login to SustainGo");
    ctx.out.newline();

    let email = match email {
        Some(email) => email,
        None => Text::new("Email:")
            .with_help_message("Admin account email")
            .prompt()
            .context("Failed to read email")?,
    };

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    if email.trim().is_empty() || password.is_empty() {
        ctx.out.error("Email and password are required.");
        std::process::exit(1);
    }

    info!(email = ?email, "Attempting login");

    match auth::login(&ctx.config, &email, &password).await {
        Ok(credential) => {
            ctx.tokens.save(&credential)?;
            ctx.session.establish(credential);
            ctx.out.newline();
            ctx.out.success(format!("Logged in as {email}"));
            ctx.out.dim(format!("Tokens saved to {}", ctx.tokens.path().display()));
            ctx.out
                .dim("Run `sustaingo dashboard` for the platform overview.");
            Ok(())
        }
        Err(e) => {
            error!("Login failed: {e}");
            ctx.out.newline();
            ctx.out.error(e.to_string());
            std::process::exit(1);
        }
    }
}
