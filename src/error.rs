use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to locate configuration directory. Cause : {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse configuration file {file:?}. Cause : {cause}")]
    SerdeTomlError { file: String, cause: String },
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { cause: String },
    #[error("preset {index} not found ({available} available)")]
    PresetNotFound { index: usize, available: usize },
    #[error("unable to acquire label lock : {0}")]
    LockError(String),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigError(_)
        | Error::ConfigReadError { .. }
        | Error::SerdeTomlError { .. }
        | Error::InterpolationError { .. } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::PresetNotFound { .. } => {
            writeln!(output, "{}: {}", Red.paint("[template error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[gpulabel error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_tagged() {
        let mut out = Vec::new();
        let error = Error::SerdeTomlError {
            file: "gpulabel.toml".to_string(),
            cause: "expected `=`".to_string(),
        };
        default_error_handler(&error, &mut out);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[config error]"));
        assert!(printed.contains("gpulabel.toml"));
    }

    #[test]
    fn test_preset_error_message() {
        let error = Error::PresetNotFound {
            index: 9,
            available: 5,
        };
        assert_eq!(error.to_string(), "preset 9 not found (5 available)");
    }

    #[test]
    fn test_generic_errors_use_app_tag() {
        let mut out = Vec::new();
        default_error_handler(&Error::from("boom"), &mut out);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[gpulabel error]"));
        assert!(printed.ends_with("boom\n"));
    }
}
