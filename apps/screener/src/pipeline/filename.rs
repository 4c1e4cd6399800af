//! Upload filename sanitization.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("filename pattern is valid"))
}

/// Reduces a client-supplied filename to a safe ASCII basename.
///
/// Accented letters fold to their ASCII base (NFKD, then non-ASCII dropped).
/// Path separators become spaces, whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped and leading/trailing `.`/`_` are trimmed. May
/// return an empty string.
pub fn secure_filename(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = disallowed().replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    let stem = trimmed.split('.').next().unwrap_or_default();
    if WINDOWS_DEVICE_NAMES.iter().any(|d| d.eq_ignore_ascii_case(stem)) {
        return format!("_{trimmed}");
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(secure_filename("resume.pdf"), "resume.pdf");
    }

    #[test]
    fn test_path_traversal_flattened() {
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\Users\\jo\\cv.docx"), "C_Users_jo_cv.docx");
    }

    #[test]
    fn test_spaces_and_symbols() {
        assert_eq!(secure_filename("My Resume (final).pdf"), "My_Resume_final.pdf");
    }

    #[test]
    fn test_accents_fold_to_ascii() {
        assert_eq!(secure_filename("résumé.pdf"), "resume.pdf");
        assert_eq!(secure_filename("Müller_CV.docx"), "Muller_CV.docx");
    }

    #[test]
    fn test_non_latin_dropped() {
        assert_eq!(secure_filename("简历_cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_device_names_prefixed() {
        assert_eq!(secure_filename("con.pdf"), "_con.pdf");
    }

    #[test]
    fn test_only_dots_becomes_empty() {
        assert_eq!(secure_filename("..."), "");
    }
}
