use std::error::Error;
use std::path::PathBuf;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(
        &mut self,
        flag: &str,
    ) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name)
                .into()
        })
    }

    /// Extract a zero-based line index for a flag
    pub fn extract_line(
        &mut self,
        flag: &str,
    ) -> Result<usize, Box<dyn Error>> {
        let raw = self.extract_value(flag)?;
        raw.parse().map_err(|_| {
            format!(
                "{} for {} must be a line number, got {raw}",
                flag, self.command_name
            )
            .into()
        })
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }
}

/// Flags shared by the document commands
#[derive(Default, Debug)]
pub struct CommonFlags {
    pub file: Option<PathBuf>,
    pub dry_run: bool,
    pub on: Option<String>,
    pub line: Option<usize>,
}

/// Which optional flags a command accepts.
#[derive(Default, Clone, Copy)]
pub struct Accepts {
    pub on: bool,
    pub line: bool,
    pub dry_run: bool,
}

pub fn parse_common(
    args: Vec<String>,
    command_name: &str,
    accepts: Accepts,
) -> Result<CommonFlags, Box<dyn Error>> {
    let mut flags = CommonFlags::default();
    let mut parser = ArgParser::new(args, command_name);
    while let Some(arg) = parser.next() {
        match arg.as_str() {
            "--dry-run" | "-n" if accepts.dry_run => flags.dry_run = true,
            "--on" if accepts.on => {
                flags.on = Some(parser.extract_value("--on")?)
            }
            "--line" | "-l" if accepts.line => {
                flags.line = Some(parser.extract_line("--line")?)
            }
            other => {
                if other.starts_with('-') {
                    return Err(format!(
                        "Unknown flag for {command_name}: {other}"
                    )
                    .into());
                }
                if flags.file.is_some() {
                    return Err(format!(
                        "{command_name} takes a single note file"
                    )
                    .into());
                }
                flags.file = Some(PathBuf::from(other));
            }
        }
    }
    Ok(flags)
}

/// Remove global `-v/--verbose` flags, returning whether any were present.
pub fn take_verbose(args: &mut Vec<String>) -> bool {
    let before = args.len();
    args.retain(|a| a != "-v" && a != "--verbose");
    args.len() != before
}
