//! Workflow command formatting.
//!
//! The runner scans step stdout for lines of the form
//! `::command key=value,key=value::message`. Data and property values are
//! percent-escaped so a multi-line message stays on one line.

/// Escape the message part of a workflow command.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Render a workflow command line (without trailing newline).
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);

    if !properties.is_empty() {
        line.push(' ');
        let props: Vec<String> = properties
            .iter()
            .map(|(k, v)| format!("{}={}", k, escape_property(v)))
            .collect();
        line.push_str(&props.join(","));
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Render a `name<<delimiter` heredoc entry for a runner file command.
///
/// Returns `None` when the name or value contains the delimiter, since the
/// runner could not tell where the value ends.
pub fn format_file_command_entry(name: &str, value: &str, delimiter: &str) -> Option<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return None;
    }
    Some(format!(
        "{name}<<{delimiter}\n{value}\n{delimiter}\n",
        name = name,
        delimiter = delimiter,
        value = value
    ))
}
