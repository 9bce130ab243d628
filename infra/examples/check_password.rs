//! Example running a password check or resync against a local multiOTP install
//!
//! Run with:
//!   cargo run --example check_password -- alice 123456
//!   cargo run --example check_password -- alice 111111 222222   (resync)
//!
//! The executable and its options come from `config.<env>.toml` or
//! `MULTIOTP_VALIDATOR__*` environment variables.

use anyhow::{bail, Context};
use motp_core::services::OneTimePasswordValidator;
use motp_infra::{config::load_config, create_validator, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let validator = create_validator(&config.validator);

    let result = match args.as_slice() {
        [username, otp] => validator.check_password(username, otp).await,
        [username, otp1, otp2] => validator.resync(username, otp1, otp2).await,
        _ => bail!("usage: check_password <username> <otp> [<otp2>]"),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!("{} ({})", result.status, result.status_code());

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
