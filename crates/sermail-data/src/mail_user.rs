//! Email participants.

use crate::error::{Error, Result, ValidationError};
use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum length of an address (RFC 5321 path limit minus brackets).
const MAX_ADDRESS_LENGTH: usize = 254;

/// Maximum length of the local part.
const MAX_LOCAL_LENGTH: usize = 64;

/// Maximum length of a single domain label.
const MAX_LABEL_LENGTH: usize = 63;

/// A sender or recipient: an address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MailUser {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl MailUser {
    /// Creates a participant with just an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or malformed.
    pub fn new(email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self { email, name: None })
    }

    /// Creates a participant with a display name and address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or malformed.
    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let mut user = Self::new(email)?;
        user.name = Some(name.into());
        Ok(user)
    }

    /// Creates a participant from an address and an optional display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or malformed.
    pub fn from_parts(email: impl Into<String>, name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => Self::with_name(email, name),
            None => Self::new(email),
        }
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for MailUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serialize::write_pretty(self, f)
    }
}

/// Validates an email address.
///
/// Accepts `local@domain` where the local part is a dot-atom or a quoted
/// string, and the domain is either a dotted host name or an address
/// literal (`[192.0.2.1]`, `[IPv6:2001:db8::1]`). Letters match
/// case-insensitively; the address is never rewritten.
fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail.into());
    }

    let invalid = || -> Error { ValidationError::InvalidEmail(email.to_string()).into() };

    if email.chars().count() > MAX_ADDRESS_LENGTH {
        return Err(invalid());
    }

    // The local part may be a quoted string containing '@'.
    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;

    if !is_valid_local_part(local) || !is_valid_domain(domain) {
        return Err(invalid());
    }

    Ok(())
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.chars().count() > MAX_LOCAL_LENGTH {
        return false;
    }

    if let Some(inner) = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return is_valid_quoted_content(inner);
    }

    // dot-atom: no leading, trailing or doubled dots
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_valid_quoted_content(inner: &str) -> bool {
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) if escaped == ' ' || escaped == '\t' || is_printable(escaped) => {}
                _ => return false,
            },
            '"' => return false,
            c if c == ' ' || c == '\t' || is_printable(c) => {}
            _ => return false,
        }
    }
    true
}

fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || !c.is_ascii()
}

fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return is_valid_address_literal(literal);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| is_valid_label(label))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().count() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii())
}

fn is_valid_address_literal(literal: &str) -> bool {
    if let Some(prefix) = literal.get(..5)
        && prefix.eq_ignore_ascii_case("ipv6:")
    {
        return literal[5..].parse::<Ipv6Addr>().is_ok();
    }
    literal.parse::<Ipv4Addr>().is_ok()
}
