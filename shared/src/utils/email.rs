//! Email address helpers

/// Mask an email address for logging (e.g., jo****@example.com)
///
/// Local parts shorter than three characters are fully hidden.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            if local.chars().count() < 3 {
                format!("****@{}", domain)
            } else {
                format!("{}****@{}", visible, domain)
            }
        }
        None => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john.doe@example.com"), "jo****@example.com");
        assert_eq!(mask_email("ab@example.com"), "****@example.com");
        assert_eq!(mask_email("not-an-email"), "****");
    }
}
