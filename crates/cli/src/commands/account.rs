//! Account commands: session, order history and checkout.

use std::io::Write;

use elegance_storefront::error::AppError;
use elegance_storefront::state::AppState;
use elegance_storefront::views::OrderView;
use secrecy::SecretString;

use super::CommandError;

/// Sign in to the demo account.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if either field is empty, or a storage
/// error if the session cannot be saved.
pub async fn login(
    state: &mut AppState,
    email: &str,
    password: &SecretString,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if !state.auth_mut().login(email, password).await? {
        return Err(AppError::BadRequest("Please enter both email and password".to_string()).into());
    }
    welcome(state, out)
}

/// Create an account and sign in.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if any field is empty, or a storage error
/// if the session cannot be saved.
pub async fn signup(
    state: &mut AppState,
    name: &str,
    email: &str,
    password: &SecretString,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if !state.auth_mut().signup(name, email, password).await? {
        return Err(AppError::BadRequest("Please fill in all fields".to_string()).into());
    }
    welcome(state, out)
}

fn welcome(state: &AppState, out: &mut impl Write) -> Result<(), CommandError> {
    if let Some(user) = state.auth().user() {
        writeln!(out, "Welcome, {}", user.name)?;
    }
    Ok(())
}

/// Sign out.
///
/// # Errors
///
/// Returns a storage error if the session cannot be saved.
pub fn logout(state: &mut AppState, out: &mut impl Write) -> Result<(), CommandError> {
    state.auth_mut().logout()?;
    writeln!(out, "Signed out")?;
    Ok(())
}

/// Show who is signed in.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn whoami(state: &AppState, out: &mut impl Write) -> Result<(), CommandError> {
    match state.auth().user() {
        Some(user) if state.auth().is_authenticated() => {
            writeln!(out, "{} <{}>", user.name, user.email)?;
        }
        _ => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

/// Show the order history of the signed-in user, newest first.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when nobody is signed in.
pub fn orders(state: &AppState, out: &mut impl Write) -> Result<(), CommandError> {
    if !state.auth().is_authenticated() {
        return Err(AppError::Unauthorized("Please sign in to view your orders".to_string()).into());
    }

    let orders = state.auth().orders();
    if orders.is_empty() {
        writeln!(out, "No orders yet")?;
        writeln!(out, "When you place your first order, it will appear here.")?;
        return Ok(());
    }

    for order in orders.iter().map(OrderView::from) {
        writeln!(out, "Order #{}  {}  [{}]", order.id, order.date, order.status)?;
        for item in &order.items {
            writeln!(
                out,
                "  {} (size {}) x{}  {}",
                item.name, item.size, item.quantity, item.line_price
            )?;
        }
        writeln!(out, "  {}  Total: {}", order.summary, order.total)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Place an order for everything in the bag.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when nobody is signed in,
/// `AppError::BadRequest` when the bag is empty, or a storage error.
pub fn checkout(state: &mut AppState, out: &mut impl Write) -> Result<(), CommandError> {
    let order_id = state.checkout()?;
    writeln!(out, "Order #{order_id} placed. Thank you for shopping with Elegance!")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::cart;
    use crate::commands::testing::{state, text};

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[tokio::test]
    async fn test_login_and_whoami() {
        let mut state = state();
        let mut out = Vec::new();
        login(&mut state, "jane@example.com", &secret("pw"), &mut out)
            .await
            .unwrap();
        whoami(&state, &mut out).unwrap();

        assert_eq!(text(out), "Welcome, Jane Doe\nJane Doe <jane@example.com>\n");
    }

    #[tokio::test]
    async fn test_login_with_missing_password() {
        let mut state = state();
        let err = login(&mut state, "jane@example.com", &secret(""), &mut Vec::new())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Please enter both email and password");
        assert!(!state.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_then_logout() {
        let mut state = state();
        let mut out = Vec::new();
        signup(&mut state, "Ann", "ann@example.com", &secret("pw"), &mut out)
            .await
            .unwrap();
        logout(&mut state, &mut out).unwrap();
        whoami(&state, &mut out).unwrap();

        assert_eq!(text(out), "Welcome, Ann\nSigned out\nNot signed in\n");
    }

    #[test]
    fn test_orders_require_login() {
        let state = state();
        let err = orders(&state, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CommandError::App(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        let mut state = state();
        login(&mut state, "jane@example.com", &secret("pw"), &mut Vec::new())
            .await
            .unwrap();

        let mut out = Vec::new();
        orders(&state, &mut out).unwrap();
        assert!(text(out).starts_with("No orders yet"));

        let err = checkout(&mut state, &mut Vec::new()).unwrap_err();
        assert_eq!(err.user_message(), "Your cart is empty");

        cart::add(&mut state, "1", Some("M"), &mut Vec::new()).unwrap();
        cart::add(&mut state, "1", Some("M"), &mut Vec::new()).unwrap();

        let mut out = Vec::new();
        checkout(&mut state, &mut out).unwrap();
        assert!(text(out).ends_with("placed. Thank you for shopping with Elegance!\n"));
        assert!(state.cart().is_empty());

        let mut out = Vec::new();
        orders(&state, &mut out).unwrap();
        let out = text(out);
        assert!(out.contains("[pending]"));
        assert!(out.contains("Rosé Elegance Dress (size M) x2  $378.00"));
        assert!(out.contains("1 item  Total: $378.00"));
    }
}
