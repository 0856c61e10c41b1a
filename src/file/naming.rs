use std::ffi::{OsStr, OsString};

/// Token separator used when joining a date onto a stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `" - "`, for stems that already contain spaces
    SpacedDash,
    /// `"_"`
    Underscore,
}

impl Separator {
    /// Spaced dash if the stem contains a space, underscore otherwise
    pub fn for_stem(stem: &OsStr) -> Self {
        if stem.as_encoded_bytes().contains(&b' ') {
            Separator::SpacedDash
        } else {
            Separator::Underscore
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::SpacedDash => " - ",
            Separator::Underscore => "_",
        }
    }
}

// Names are handled as encoded bytes so that non-UTF-8 names work too. Every
// split happens right before or after an ASCII byte.
fn from_encoded(bytes: &[u8]) -> &OsStr {
    // SAFETY: `bytes` is a slice of `OsStr::as_encoded_bytes` output cut next
    // to an ASCII byte, which keeps it a valid encoding
    unsafe { OsStr::from_encoded_bytes_unchecked(bytes) }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Splits a filename into stem and extension.
///
/// The extension keeps its leading dot. Leading dots never start an
/// extension, so dotfiles have none.
///
/// # Examples
///
/// ```
/// use std::ffi::OsStr;
/// use filedate::file::naming::split_extension;
///
/// assert_eq!(
///     split_extension(OsStr::new("file.tar.gz")),
///     (OsStr::new("file.tar"), OsStr::new(".gz"))
/// );
/// assert_eq!(split_extension(OsStr::new(".bashrc")), (OsStr::new(".bashrc"), OsStr::new("")));
/// ```
pub fn split_extension(filename: &OsStr) -> (&OsStr, &OsStr) {
    let bytes = filename.as_encoded_bytes();
    if let Some(dot) = bytes.iter().rposition(|&b| b == b'.') {
        let leading = &bytes[..dot];
        if leading.iter().any(|&b| b != b'.') {
            return (from_encoded(leading), from_encoded(&bytes[dot..]));
        }
    }
    (filename, OsStr::new(""))
}

/// Drops a first token made only of decimal digits, e.g. a year prefix.
///
/// Only applies when at least one more token follows, so `"2020"` alone is
/// kept as is.
pub fn strip_numeric_prefix(stem: &OsStr, separator: Separator) -> &OsStr {
    let bytes = stem.as_encoded_bytes();
    let sep = separator.as_str().as_bytes();
    match find(bytes, sep) {
        Some(at) if is_numeric_token(&bytes[..at]) => from_encoded(&bytes[at + sep.len()..]),
        _ => stem,
    }
}

fn is_numeric_token(token: &[u8]) -> bool {
    !token.is_empty() && token.iter().all(u8::is_ascii_digit)
}

/// Result of planning a rename for one filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Stem after optional prefix stripping
    pub stem: OsString,
    pub separator: Separator,
    /// `None` when the stem already carries the date suffix
    pub new_name: Option<OsString>,
}

/// Works out the dated filename for `filename`.
///
/// # Examples
///
/// ```
/// use std::ffi::OsStr;
/// use filedate::file::naming::plan_rename;
///
/// let plan = plan_rename(OsStr::new("2020_vacation.jpg"), "2021-05-01", true);
/// assert_eq!(plan.new_name.as_deref(), Some(OsStr::new("vacation_2021-05-01.jpg")));
///
/// let plan = plan_rename(OsStr::new("My Photo.png"), "2023-03-15", false);
/// assert_eq!(plan.new_name.as_deref(), Some(OsStr::new("My Photo - 2023-03-15.png")));
/// ```
pub fn plan_rename(filename: &OsStr, date: &str, remove_prefix: bool) -> RenamePlan {
    let (stem, extension) = split_extension(filename);
    let separator = Separator::for_stem(stem);

    let stem = if remove_prefix {
        strip_numeric_prefix(stem, separator)
    } else {
        stem
    };

    let suffix = format!("{}{}", separator.as_str(), date);
    let new_name = if stem.as_encoded_bytes().ends_with(suffix.as_bytes()) {
        None
    } else {
        let mut name = OsString::with_capacity(stem.len() + suffix.len() + extension.len());
        name.push(stem);
        name.push(&suffix);
        name.push(extension);
        Some(name)
    };

    RenamePlan {
        stem: stem.to_os_string(),
        separator,
        new_name,
    }
}

#[cfg(test)]
mod extension_tests {
    use super::*;

    fn split(name: &str) -> (&OsStr, &OsStr) {
        split_extension(OsStr::new(name))
    }

    fn pair<'a>(stem: &'a str, extension: &'a str) -> (&'a OsStr, &'a OsStr) {
        (OsStr::new(stem), OsStr::new(extension))
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(split("AAA.jpg"), pair("AAA", ".jpg"));
    }

    #[test]
    fn test_split_multiple_dots() {
        assert_eq!(split("file.tar.gz"), pair("file.tar", ".gz"));
    }

    #[test]
    fn test_split_no_extension() {
        assert_eq!(split("Makefile"), pair("Makefile", ""));
    }

    #[test]
    fn test_split_dotfiles() {
        assert_eq!(split(".bashrc"), pair(".bashrc", ""));
        assert_eq!(split("..hidden"), pair("..hidden", ""));
        assert_eq!(split(".config.toml"), pair(".config", ".toml"));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split("odd."), pair("odd", "."));
    }

    #[test]
    fn test_split_spaces_kept_in_stem() {
        assert_eq!(split("My Photo.png"), pair("My Photo", ".png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_split_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"photo_\xff.jpg");
        assert_eq!(
            split_extension(name),
            (OsStr::from_bytes(b"photo_\xff"), OsStr::new(".jpg"))
        );
    }
}
