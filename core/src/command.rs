/// The scanner flag selecting a single interface.
pub fn interface_flag(name: &str) -> String {
    format!("--interface={name}")
}

/// Splits `command` on single spaces and appends `args`.
pub fn parse_command<I, S>(command: &str, args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    command
        .split(' ')
        .map(str::to_string)
        .chain(args.into_iter().map(Into::into))
        .collect()
}
