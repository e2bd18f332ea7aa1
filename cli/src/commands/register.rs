//! Interactive registration and profile onboarding.
//!
//! Three steps against the public endpoints: register the account, then (for
//! vendors and NGOs) create the role profile with the access token the
//! registration response just issued. Customers stop after step one.

use anyhow::{Context as _, Result};
use inquire::{Confirm, Select, Text};
use sustaingo_business::auth::{
    self, NgoProfileInput, REGISTRATION_FAILED, RegisterInput, VendorProfileInput,
};
use tracing::{info, instrument};

use crate::context::CliContext;

#[instrument(skip_all, name = "register")]
pub async fn run_register(ctx: &mut CliContext) -> Result<()> {
    ctx.out.header("Register a SustainGo account");
    ctx.out.newline();

    let full_name = required_text("Full name:")?;
    let email = required_text("Email:")?;
    let phone = required_text("Phone:")?;

    let role = Select::new("Role:", vec!["customer", "vendor", "ngo"])
        .with_help_message("Vendors and NGOs also create a profile")
        .prompt()
        .context("Failed to select role")?;

    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;
    let confirm_password =
        rpassword::prompt_password("Confirm password: ").context("Failed to read password")?;

    if password.is_empty() {
        ctx.out.error("Password is required.");
        std::process::exit(1);
    }
    if password != confirm_password {
        ctx.out.error("Passwords do not match.");
        std::process::exit(1);
    }

    let input = RegisterInput {
        full_name,
        email: email.clone(),
        phone,
        role: role.to_owned(),
        password,
        confirm_password,
    };

    let registered = match auth::register(&ctx.config, &input).await {
        Ok(registered) => registered,
        Err(e) => ctx.fail(REGISTRATION_FAILED, &e),
    };
    info!(email = ?email, role = ?registered.role, "account registered");

    // Profile creation authenticates with the fresh access token, not any
    // previously stored admin session.
    let access = registered.credential.access.clone();

    match role {
        "vendor" => {
            ctx.out.newline();
            ctx.out.header("Vendor profile");

            let profile = VendorProfileInput {
                name: required_text("Business name:")?,
                description: optional_text("Description:")?,
                delivery_time_minutes: prompt_delivery_time()?,
                delivery_available: Confirm::new("Delivery available?")
                    .with_default(false)
                    .prompt()
                    .context("Failed to read delivery availability")?,
                logo: optional_text("Logo URL:")?,
            };

            if let Err(e) = auth::create_vendor_profile(&ctx.config, &access, &profile).await {
                ctx.fail(REGISTRATION_FAILED, &e);
            }
        }
        "ngo" => {
            ctx.out.newline();
            ctx.out.header("NGO profile");

            let profile = NgoProfileInput {
                organization_name: required_text("Organization name:")?,
                region: required_text("Region:")?,
                description: optional_text("Description:")?,
                website: optional_text("Website:")?,
                logo: optional_text("Logo URL:")?,
            };

            if let Err(e) = auth::create_ngo_profile(&ctx.config, &access, &profile).await {
                ctx.fail(REGISTRATION_FAILED, &e);
            }
        }
        _ => {}
    }

    ctx.out.newline();
    ctx.out
        .success(format!("Successfully registered {role} and created profile."));
    Ok(())
}

fn required_text(prompt: &str) -> Result<String> {
    let value = Text::new(prompt)
        .prompt()
        .with_context(|| format!("Failed to read {prompt}"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} may not be empty", prompt.trim_end_matches(':'));
    }
    Ok(value)
}

fn optional_text(prompt: &str) -> Result<String> {
    Ok(Text::new(prompt)
        .with_help_message("Press Enter to skip")
        .prompt_skippable()
        .with_context(|| format!("Failed to read {prompt}"))?
        .unwrap_or_default())
}

fn prompt_delivery_time() -> Result<u32> {
    let raw = Text::new("Delivery time (minutes):")
        .with_default("30")
        .prompt()
        .context("Failed to read delivery time")?;
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid delivery time: {raw}"))
}
