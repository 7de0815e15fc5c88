//! ANSI escape-sequence stripping.
//!
//! Help scripts color their terminal output; embedded in a static page
//! those sequences are garbage bytes. This removes CSI sequences
//! (colors, cursor movement), OSC sequences (titles, hyperlinks) and
//! lone two-byte Fe escapes, and leaves everything else untouched.

use std::sync::OnceLock;

use regex::Regex;

// CSI first so `ESC [` is consumed whole, then OSC (BEL- or
// ST-terminated, or dangling at end of input), then any remaining Fe
// escape byte.
const ANSI_PATTERN: &str =
    r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)?|\x1b[@-_]";

fn ansi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The pattern is a compile-time constant; if it were invalid no
        // test in this module could pass.
        #[allow(clippy::expect_used)]
        Regex::new(ANSI_PATTERN).expect("ANSI_PATTERN is valid")
    })
}

/// Remove all ANSI escape sequences from `text`.
///
/// Idempotent: the output never contains an ESC byte, so stripping a
/// second time returns the input unchanged. Plain text passes through
/// untouched.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ansi_regex().replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        let text = "Usage: mdl backup [options]\n  -h  Show help\n";
        assert_eq!(strip_ansi(text), text);
    }

    #[test]
    fn strips_color_codes() {
        let colored = "\x1b[1;32mUsage:\x1b[0m mdl backup";
        assert_eq!(strip_ansi(colored), "Usage: mdl backup");
    }

    #[test]
    fn strips_256_and_truecolor_codes() {
        let colored = "\x1b[38;5;208mwarn\x1b[0m \x1b[38;2;255;0;0merror\x1b[0m";
        assert_eq!(strip_ansi(colored), "warn error");
    }

    #[test]
    fn strips_cursor_and_erase_sequences() {
        let text = "progress\x1b[2K\x1b[1Gdone";
        assert_eq!(strip_ansi(text), "progressdone");
    }

    #[test]
    fn strips_osc_hyperlink() {
        let linked = "\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\";
        assert_eq!(strip_ansi(linked), "docs");
    }

    #[test]
    fn strips_bel_terminated_osc() {
        let titled = "\x1b]0;my title\x07body";
        assert_eq!(strip_ansi(titled), "body");
    }

    #[test]
    fn strips_dangling_osc_at_end_of_input() {
        assert_eq!(strip_ansi("text\x1b]0;half"), "text");
    }

    #[test]
    fn truncated_csi_still_loses_its_escape_byte() {
        // No final byte, so only the two-byte escape is consumed; the
        // remaining digits are plain text but no ESC survives.
        assert_eq!(strip_ansi("text\x1b[31"), "text31");
    }

    proptest! {
        #[test]
        fn stripping_is_idempotent(input in "\\PC*") {
            let once = strip_ansi(&input);
            let twice = strip_ansi(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_contains_no_escape_byte(input in "\\PC*") {
            // \PC excludes control chars, so inject escapes explicitly.
            let noisy = format!("\x1b[1m{input}\x1b[0m");
            prop_assert!(!strip_ansi(&noisy).contains('\x1b'));
        }

        #[test]
        fn identity_on_escape_free_input(input in "[a-zA-Z0-9 .:/_-]*") {
            prop_assert_eq!(strip_ansi(&input), input);
        }
    }
}
