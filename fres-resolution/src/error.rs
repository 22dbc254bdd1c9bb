use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error {
    #[display("invalid configuration: {_0}")]
    Config(String),

    #[display("unusable resolution: {_0}")]
    UnusableResolution(String),

    #[display("invalid index: {_0}")]
    InvalidIndex(isize),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        let e = $crate::Error::$kind(format!($($arg)*));
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond {
            return $crate::error::err!($kind, $($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
