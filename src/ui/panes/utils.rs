//! Helpers shared by the panes

/// Replace control characters with blanks so they never reach the terminal
///
/// Text coming off the bus can contain ESC sequences or BEL; drawn as-is they
/// would be interpreted by the terminal instead of shown.
pub(crate) fn terminal_safe(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_safe() {
        assert_eq!(terminal_safe("ID=1:\x1b[2J\x07"), "ID=1: [2J ");
        assert_eq!(terminal_safe("AB\u{FFFD}."), "AB\u{FFFD}.");
        assert_eq!(terminal_safe("\r\n\t\0"), "    ");
    }
}
