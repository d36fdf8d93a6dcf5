//! Property-based tests for backup filename derivation.

#[cfg(test)]
mod proptest_tests {
    use crate::dest::backup_filename;
    use proptest::prelude::*;

    proptest! {
        /// Property: the filename is always a single path component
        #[test]
        fn filename_never_contains_separator(hostname in ".*", sn in ".*") {
            let name = backup_filename(&hostname, &sn);
            prop_assert!(
                !name.contains('/'),
                "backup_filename produced a separator from hostname '{}', sn '{}'",
                hostname,
                sn
            );
        }

        /// Property: derivation is deterministic (same input = same output)
        #[test]
        fn filename_is_deterministic(hostname in ".*", sn in ".*") {
            let name1 = backup_filename(&hostname, &sn);
            let name2 = backup_filename(&hostname, &sn);
            prop_assert_eq!(name1, name2);
        }

        /// Property: sanitization is idempotent — feeding the already
        /// sanitized components back in changes nothing
        #[test]
        fn filename_is_idempotent(hostname in ".*", sn in ".*") {
            let name = backup_filename(&hostname, &sn);
            let resanitized = backup_filename(
                &hostname.replace('/', "-"),
                &sn.replace('/', "-"),
            );
            prop_assert_eq!(name, resanitized);
        }

        /// Property: the name always carries the `--` separator and the
        /// `.txt` extension
        #[test]
        fn filename_keeps_fixed_shape(hostname in "[a-z0-9]{1,12}", sn in "[A-Z0-9]{1,12}") {
            let name = backup_filename(&hostname, &sn);
            prop_assert_eq!(name, format!("{}--{}.txt", hostname, sn));
        }
    }
}
