//! Normalisation and validation rules for account identity fields.
//!
//! Usernames and emails are trimmed and lowercased before they are compared or
//! stored, so uniqueness is effectively case-insensitive.

use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;
pub const AVATAR_URL_MAX_LEN: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be between 3 and 30 characters")]
    UsernameLength,

    #[error("Username may only contain letters, digits, '_', '.' and '-'")]
    UsernameCharacters,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password is required")]
    EmptyPassword,

    #[error("Password must be between 8 and 128 characters")]
    PasswordLength,

    #[error("Avatar must be an http(s) URL of at most 2048 characters")]
    InvalidAvatarUrl,
}

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_.\-]+$").expect("valid username regex"))
}

pub fn normalize_username(raw: &str) -> Result<String, CredentialError> {
    let username = raw.trim().to_lowercase();

    if username.is_empty() {
        return Err(CredentialError::EmptyUsername);
    }

    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(CredentialError::UsernameLength);
    }

    if !username_pattern().is_match(&username) {
        return Err(CredentialError::UsernameCharacters);
    }

    Ok(username)
}

pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(CredentialError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

/// Passwords are not trimmed; whitespace is part of the secret.
pub fn validate_password(raw: &str) -> Result<(), CredentialError> {
    if raw.is_empty() {
        return Err(CredentialError::EmptyPassword);
    }

    let len = raw.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(CredentialError::PasswordLength);
    }

    Ok(())
}

pub fn normalize_avatar_url(raw: &str) -> Result<String, CredentialError> {
    let url = raw.trim();

    let has_scheme = url.starts_with("https://") || url.starts_with("http://");
    let has_host = url
        .split_once("://")
        .map(|(_, rest)| !rest.is_empty() && !rest.starts_with('/'))
        .unwrap_or(false);

    if !has_scheme || !has_host || url.len() > AVATAR_URL_MAX_LEN || url.contains(char::is_whitespace)
    {
        return Err(CredentialError::InvalidAvatarUrl);
    }

    Ok(url.to_string())
}
