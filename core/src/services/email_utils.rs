//! Email masking for log output.
//!
//! Codes are never logged at all; emails are logged masked so traces
//! stay useful without spelling out subject identities.

/// Masks an email for logging, keeping the first local character and
/// the domain: `alice@example.com` -> `a***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => "***".to_string(),
        },
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@b.co"), "a***@b.co");
    }

    #[test]
    fn test_mask_email_degenerate_inputs() {
        assert_eq!(mask_email(""), "***");
        assert_eq!(mask_email("no-at-sign"), "***");
        assert_eq!(mask_email("@example.com"), "***");
    }
}
