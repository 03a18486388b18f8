use std::fmt;
use std::sync::Arc;

use owo_colors::OwoColorize;

/// A formatting capability: maps a piece of text to its styled form.
///
/// Formatters are shared values, so a [`Theme`] can be cloned per render
/// call without copying any state.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Wrap a styling function as a [`Formatter`].
pub fn formatter(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Formatter {
    Arc::new(f)
}

/// The formatters used to style a rendered diff, one per semantic role.
#[derive(Clone)]
pub struct Theme {
    /// Lines present only on the "after" side: the `+` marker, the right
    /// gutter, and unchanged text on insert-only lines.
    pub insert_line: Formatter,
    /// Inserted text itself.
    pub insert_text: Formatter,
    /// Unchanged lines, gutters on unchanged lines, and block separators.
    pub equal: Formatter,
    /// Lines present only on the "before" side.
    pub delete_line: Formatter,
    /// Deleted text itself.
    pub delete_text: Formatter,
    /// The diff's name in the header.
    pub name: Formatter,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            insert_line: formatter(|s| s.green().to_string()),
            insert_text: formatter(|s| s.black().on_green().to_string()),
            equal: formatter(|s| s.dimmed().to_string()),
            delete_line: formatter(|s| s.red().to_string()),
            delete_text: formatter(|s| s.black().on_red().to_string()),
            name: formatter(|s| s.bold().to_string()),
        }
    }
}

impl Theme {
    /// A theme that applies no styling at all, for piped output or
    /// terminals without color support.
    pub fn plain() -> Self {
        Self {
            insert_line: formatter(|s| s.to_string()),
            insert_text: formatter(|s| s.to_string()),
            equal: formatter(|s| s.to_string()),
            delete_line: formatter(|s| s.to_string()),
            delete_text: formatter(|s| s.to_string()),
            name: formatter(|s| s.to_string()),
        }
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_is_identity() {
        let theme = Theme::plain();

        assert_eq!((theme.insert_text)("abc"), "abc");
        assert_eq!((theme.delete_text)("abc"), "abc");
        assert_eq!((theme.equal)("abc"), "abc");
        assert_eq!((theme.name)("abc"), "abc");
    }

    #[test]
    fn test_default_theme_styles_text() {
        let theme = Theme::default();

        let styled = (theme.insert_line)("abc");
        assert!(styled.contains("abc"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn test_custom_formatter() {
        let upper = formatter(|s| s.to_uppercase());

        assert_eq!(upper("abc"), "ABC");
    }
}
