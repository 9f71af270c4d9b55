//! The user name every request must carry.

use serde::Deserialize;

use crate::ValidationError;

// ---

/// Query string accepted by every named route (`?name=...`).
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    name: Option<String>,
}

impl UserQuery {
    /// Trimmed, title-cased name; blank or absent is rejected.
    pub fn display_name(&self) -> Result<String, ValidationError> {
        // ---
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(title_case(name))
    }
}

/// Upper-case the first letter of every run of letters and lower-case the
/// rest, so "ada o'neil" becomes "Ada O'Neil".
fn title_case(input: &str) -> String {
    // ---
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}
