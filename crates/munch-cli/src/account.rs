//! `login` and `signup` command handlers.

use munch_feed::{FeedClient, SignUp};

use crate::feed::report;

/// Requests an OTP and, when `otp` is given, verifies it.
///
/// # Errors
///
/// Returns an error on a transport failure or timeout.
pub(crate) async fn run_login(
    client: &FeedClient,
    phone: &str,
    otp: Option<&str>,
) -> anyhow::Result<()> {
    let challenge = match client.login(phone).await {
        Ok(challenge) => challenge,
        Err(e) if e.alert().is_some() => {
            report(&e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("Login successful. OTP sent!");

    let Some(otp) = otp else {
        println!("re-run with --otp <CODE> to verify");
        return Ok(());
    };
    match challenge.verify(otp) {
        Ok(()) => println!("OTP Verified Successfully"),
        Err(e) => report(&e),
    }
    Ok(())
}

/// # Errors
///
/// Returns an error on a transport failure or timeout.
pub(crate) async fn run_signup(client: &FeedClient, sign_up: &SignUp) -> anyhow::Result<()> {
    match client.create_customer(sign_up).await {
        Ok(()) => println!("Account created successfully!"),
        Err(e) if e.alert().is_some() => report(&e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
