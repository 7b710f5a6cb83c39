//! Environment and argument report

use std::io::{self, Write};

/// Snapshot of the process environment, in platform order
///
/// Keys and values that are not valid UTF-8 are converted lossily.
pub fn environment() -> Vec<(String, String)> {
    std::env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

/// Write `KEY = VALUE` per variable, then `  ARG: <value>` per argument
pub fn write_report<W: Write>(
    out: &mut W,
    vars: &[(String, String)],
    args: &[String],
) -> io::Result<()> {
    for (key, value) in vars {
        writeln!(out, "{} = {}", key, value)?;
    }

    for arg in args {
        writeln!(out, "  ARG: {}", arg)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(vars: &[(&str, &str)], args: &[&str]) -> String {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

        let mut out = Vec::new();
        write_report(&mut out, &vars, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_lists_variables_then_arguments() {
        let output = render(&[("FOO", "bar")], &["x", "y"]);
        assert_eq!(output, "FOO = bar\n  ARG: x\n  ARG: y\n");
    }

    #[test]
    fn test_arguments_keep_their_order() {
        let output = render(&[("B", "2"), ("A", "1")], &["third", "first", "second"]);
        let args: Vec<&str> = output
            .lines()
            .filter_map(|line| line.strip_prefix("  ARG: "))
            .collect();
        assert_eq!(args, vec!["third", "first", "second"]);
        assert!(output.lines().any(|line| line == "A = 1"));
        assert!(output.lines().any(|line| line == "B = 2"));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        assert_eq!(render(&[], &[]), "");
    }

    #[test]
    fn test_values_are_written_as_is() {
        let output = render(&[("EQ", "a = b"), ("EMPTY", "")], &[""]);
        assert_eq!(output, "EQ = a = b\nEMPTY = \n  ARG: \n");
    }

    #[test]
    fn test_environment_matches_process_environment() {
        assert_eq!(environment().len(), std::env::vars_os().count());
    }
}
