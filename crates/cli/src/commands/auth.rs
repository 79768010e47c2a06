//! Session commands.
//!
//! # Usage
//!
//! ```bash
//! bo-cli login -e viewer@company.com -p demo
//! bo-cli whoami
//! bo-cli logout
//! ```

use std::io::BufRead;

use secrecy::SecretString;

use backoffice_admin::error::AppError;
use backoffice_admin::services::AuthService;

use super::Context;

/// Sign in. The password is read from stdin when not given.
#[allow(clippy::print_stdout)]
pub async fn login(ctx: &Context, email: &str, password: Option<String>) -> Result<(), AppError> {
    let password = match password {
        Some(password) => SecretString::from(password),
        None => read_password()?,
    };

    let auth = AuthService::new(&ctx.sessions, ctx.backend.latency());
    let session = auth.login(email, &password).await?;

    if let Some(user) = session.user {
        println!("Signed in as {} <{}> ({})", user.name, user.email, user.role);
    }
    Ok(())
}

/// Sign out.
#[allow(clippy::print_stdout)]
pub fn logout(ctx: &Context) -> Result<(), AppError> {
    AuthService::new(&ctx.sessions, ctx.backend.latency()).logout()?;
    println!("Signed out");
    Ok(())
}

/// Print the current session.
#[allow(clippy::print_stdout)]
pub fn whoami(ctx: &Context) {
    let session = AuthService::new(&ctx.sessions, ctx.backend.latency()).current();
    match (&session.user, session.is_authenticated) {
        (Some(user), true) => {
            let access = if session.can_write() {
                "read-write"
            } else {
                "read-only"
            };
            println!("{} <{}> ({}, {access})", user.name, user.email, user.role);
        }
        _ => println!("Not signed in"),
    }
}

fn read_password() -> Result<SecretString, AppError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(SecretString::from(line.trim_end_matches(['\r', '\n']).to_string()))
}
