//! Git comment stripping.

/// Marker line git writes above the diff in verbose commits.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Removes the lines `git commit` would strip from a message file.
///
/// Everything from the scissors line on is dropped, as are lines that are
/// exactly `#` or start with `# `. Lines like `#time 1h` are kept.
#[must_use]
pub fn strip_git_comments(message: &str) -> String {
    message
        .lines()
        .take_while(|line| line.trim_end() != SCISSORS)
        .filter(|line| {
            let line = line.trim_start();
            line != "#" && !line.starts_with("# ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_plain_message() {
        let message = "Fix bug\n\nPROJ-1 #time 1h";
        assert_eq!(strip_git_comments(message), message);
    }

    #[test]
    fn test_strips_template_comments() {
        let message = "PROJ-1 #time 1h\n\
                       # Please enter the commit message for your changes.\n\
                       #\n\
                       # On branch main";
        assert_eq!(strip_git_comments(message), "PROJ-1 #time 1h");
    }

    #[test]
    fn test_keeps_command_lines() {
        let message = "PROJ-1\n#time 1h\n#done";
        assert_eq!(strip_git_comments(message), message);
    }

    #[test]
    fn test_drops_everything_after_scissors() {
        let message = format!("PROJ-1 #time 1h\n{SCISSORS}\ndiff --git a/x b/x\n+#done");
        assert_eq!(strip_git_comments(&message), "PROJ-1 #time 1h");
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_git_comments(""), "");
    }
}
