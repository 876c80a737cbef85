use std::error;
use std::fmt;
use std::io;

use log::SetLoggerError;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Csv(csv::Error),
    SetLogger(SetLoggerError),
    Config(String)
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::Csv(err)
    }
}

impl From<SetLoggerError> for Error {
    fn from(err: SetLoggerError) -> Error {
        Error::SetLogger(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref err) => write!(f, "I/O error: {}", err),
            Error::Csv(ref err) => write!(f, "CSV error: {}", err),
            Error::SetLogger(ref err) => write!(f, "failed to initialize logger: {}", err),
            Error::Config(ref msg) => write!(f, "{}", msg)
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Csv(ref err) => Some(err),
            Error::SetLogger(ref err) => Some(err),
            Error::Config(_) => None
        }
    }
}
