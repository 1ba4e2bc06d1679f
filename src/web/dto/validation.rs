//! Request validation helpers for the Web API.

/// Check email syntax.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, a `.` after it with
/// at least one character on each side, and no whitespace anywhere.
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("you@example.com"));
    }

    #[test]
    fn test_accepts_subdomains_and_plus_tags() {
        assert!(is_valid_email("me+tag@mail.example.co.jp"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_rejects_missing_dot_in_domain() {
        assert!(!is_valid_email("you@example"));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_dot_at_domain_edges() {
        assert!(!is_valid_email("you@.com"));
        assert!(!is_valid_email("you@example."));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("you @example.com"));
        assert!(!is_valid_email("you@exa mple.com"));
        assert!(!is_valid_email(" you@example.com"));
    }

    #[test]
    fn test_rejects_double_at() {
        assert!(!is_valid_email("you@@example.com"));
        assert!(!is_valid_email("you@host@example.com"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_email(""));
    }
}
