use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Io,
    Decode,
    Config,
    Other,
}

impl ErrorClass {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorClass::Input => 2,
            ErrorClass::Io => 3,
            ErrorClass::Decode => 4,
            ErrorClass::Config => 5,
            ErrorClass::Other => 1,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::Io => "IO",
            ErrorClass::Decode => "DECODE",
            ErrorClass::Config => "CONFIG",
            ErrorClass::Other => "ERROR",
        }
    }
}

#[derive(Debug)]
pub struct TumbleweedError {
    pub class: ErrorClass,
    pub message: String,
}

impl TumbleweedError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self { class, message: message.into() }
    }

    pub fn input(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Input, msg) }
    pub fn io(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Io, msg) }
    pub fn decode(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Decode, msg) }
    pub fn config(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Config, msg) }
    pub fn other(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Other, msg) }

    pub fn format_stderr(&self) -> String {
        format!("error[{}]: {}", self.class.tag(), self.message)
    }
}

impl fmt::Display for TumbleweedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_stderr())
    }
}

impl std::error::Error for TumbleweedError {}

impl From<serde_json::Error> for TumbleweedError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(format!("malformed session recording: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_format_carries_tag() {
        let err = TumbleweedError::decode("bad json");
        assert_eq!(err.to_string(), "error[DECODE]: bad json");
        assert_eq!(err.class.exit_code(), 4);
        assert_eq!(TumbleweedError::input("x").class.exit_code(), 2);
    }
}
