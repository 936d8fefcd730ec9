/// Asserts that a string contains a substring.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        let haystack_owned = &$haystack;
        let needle_owned = &$needle;
        let haystack: &str = ::core::convert::AsRef::<str>::as_ref(haystack_owned);
        let needle: &str = ::core::convert::AsRef::<str>::as_ref(needle_owned);
        assert!(
            haystack.contains(needle),
            "expected {:?} to contain {:?}",
            haystack,
            needle
        );
    }};
}

/// Asserts that a string does not contain a substring.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        let haystack_owned = &$haystack;
        let needle_owned = &$needle;
        let haystack: &str = ::core::convert::AsRef::<str>::as_ref(haystack_owned);
        let needle: &str = ::core::convert::AsRef::<str>::as_ref(needle_owned);
        assert!(
            !haystack.contains(needle),
            "expected {:?} not to contain {:?}",
            haystack,
            needle
        );
    }};
}

/// Asserts that a result is an error whose message contains a substring.
#[macro_export]
macro_rules! assert_err_contains {
    ($result:expr, $needle:expr $(,)?) => {{
        let needle: &str = ::core::convert::AsRef::<str>::as_ref(&$needle);
        match $result {
            Ok(_) => panic!("expected an error containing {:?}, got Ok", needle),
            Err(err) => {
                let message = err.to_string();
                assert!(
                    message.contains(needle),
                    "expected error {:?} to contain {:?}",
                    message,
                    needle
                );
            }
        }
    }};
}
