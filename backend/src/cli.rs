//! Minimal CLI parsing for endpoint overrides.

use std::env;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub api_endpoint: Option<String>,
    pub database_url: Option<String>,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    /// Parse flags in `--flag value` or `--flag=value` form. Unknown flags are ignored.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-endpoint" => options.api_endpoint = args.next(),
                "--database-url" => options.database_url = args.next(),
                _ => {
                    if let Some((flag, value)) = arg.split_once('=') {
                        match flag {
                            "--api-endpoint" => options.api_endpoint = Some(value.to_string()),
                            "--database-url" => options.database_url = Some(value.to_string()),
                            _ => {}
                        }
                    }
                }
            }
        }
        options
    }
}
