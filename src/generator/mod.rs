//! Random password generation.
//!
//! Passwords are groups of random bytes, hex-encoded and joined with
//! `-`. The default shape is three 2-byte groups, e.g. `3fa9-0c11-be72`.

use std::fmt::Write;

use rand::RngCore;

/// Number of groups in a default password.
pub const DEFAULT_GROUPS: usize = 3;

/// Random bytes per group in a default password (4 hex characters).
pub const DEFAULT_GROUP_BYTES: usize = 2;

/// Generate a password in the default `xxxx-xxxx-xxxx` shape.
pub fn generate_password() -> String {
    generate_with(DEFAULT_GROUPS, DEFAULT_GROUP_BYTES)
}

/// Generate `groups` hex groups of `bytes_per_group` random bytes each.
pub fn generate_with(groups: usize, bytes_per_group: usize) -> String {
    let mut rng = rand::rng();
    let mut buf = vec![0u8; bytes_per_group];
    let mut out = String::with_capacity(groups * (bytes_per_group * 2 + 1));

    for i in 0..groups {
        if i > 0 {
            out.push('-');
        }
        rng.fill_bytes(&mut buf);
        for b in &buf {
            // Writing to a String cannot fail.
            let _ = write!(out, "{b:02x}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape() {
        let pw = generate_password();
        let groups: Vec<&str> = pw.split('-').collect();
        assert_eq!(groups.len(), 3);
        for g in groups {
            assert_eq!(g.len(), 4);
            assert!(g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn custom_shape() {
        let pw = generate_with(5, 3);
        assert_eq!(pw.len(), 5 * 6 + 4);
        assert_eq!(pw.matches('-').count(), 4);
    }

    #[test]
    fn zero_groups_is_empty() {
        assert_eq!(generate_with(0, 2), "");
    }

    #[test]
    fn passwords_differ() {
        assert_ne!(generate_with(4, 4), generate_with(4, 4));
    }
}
