use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

/// Which phase of a run produced an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Runtime,
    Internal,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code {
            1..=9 => ErrorKind::Lex,
            10..=19 => ErrorKind::Parse,
            20..=49 => ErrorKind::Runtime,
            _ => ErrorKind::Internal,
        }
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn in_column(self, column: Column) -> Error {
        debug_assert!(self.column.is_none());
        Error { column, ..self }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    fn description(&self) -> &'static str {
        match self.code {
            1 => "Invalid character",
            2 => "Newline in string literal",
            3 => "Negation must be followed by at least one digit",
            4 => "Integer literal out of range",
            10 => "Program lines cannot be empty",
            11 => "Statement body expected",
            12 => "Statement keyword expected",
            13 => "Unexpected token",
            14 => "Extra tokens after statement end",
            20 => "Type mismatch",
            21 => "Variable not found",
            22 => "Division by zero",
            23 => "Integer overflow",
            24 => "Label not found",
            25 => "Invalid label format",
            26 => "Invalid range",
            27 => "Out of range",
            28 => "Infinite loop is not permitted",
            29 => "GOSUB cannot jump to the same line it is on",
            30 => "No GOSUB stack to return to",
            31 => "GOSUB stack overflow",
            32 => "Unknown relational operator",
            33 => "Interrupted",
            _ => "Internal error",
        }
    }
}

pub enum ErrorCode {
    InvalidCharacter = 1,
    UnterminatedString = 2,
    MissingDigits = 3,
    LiteralOverflow = 4,
    EmptyLine = 10,
    MissingStatement = 11,
    ExpectedStatement = 12,
    UnexpectedToken = 13,
    ExtraTokens = 14,
    TypeMismatch = 20,
    UndefinedVariable = 21,
    DivisionByZero = 22,
    Overflow = 23,
    UndefinedLabel = 24,
    InvalidTarget = 25,
    InvalidRange = 26,
    OutOfRange = 27,
    InfiniteLoop = 28,
    SelfGosub = 29,
    ReturnWithoutGosub = 30,
    StackOverflow = 31,
    UnknownOperator = 32,
    Interrupted = 33,
    InternalError = 51,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let phase = match self.kind() {
            ErrorKind::Lex => "Error during lexing",
            ErrorKind::Parse => "Error during parsing",
            ErrorKind::Runtime => "Error during execution",
            ErrorKind::Internal => "Internal error",
        };
        let mut location = String::new();
        if let Some(line_number) = self.line_number {
            location.push_str(&format!(" Line {}", line_number));
        }
        if let Some(column) = self.column {
            location.push_str(&format!(" Column {}", column));
        }
        let message = if self.message.is_empty() {
            self.description()
        } else {
            self.message.as_str()
        };
        if location.is_empty() {
            write!(f, "{}: {}", phase, message)
        } else {
            write!(f, "{}:{}: {}", phase, location, message)
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display_with_location() {
        let e = error!(InvalidCharacter, Some(3), ..Some(7));
        assert_eq!(
            e.to_string(),
            "Error during lexing: Line 3 Column 7: Invalid character"
        );
    }

    #[test]
    fn test_display_message_replaces_description() {
        let e = error!(UndefinedLabel, Some(2); "Label FOO not found");
        assert_eq!(
            e.to_string(),
            "Error during execution: Line 2: Label FOO not found"
        );
    }

    #[test]
    fn test_kind() {
        use super::ErrorKind;
        assert_eq!(error!(MissingDigits).kind(), ErrorKind::Lex);
        assert_eq!(error!(ExtraTokens).kind(), ErrorKind::Parse);
        assert_eq!(error!(DivisionByZero).kind(), ErrorKind::Runtime);
        assert_eq!(error!(InternalError).kind(), ErrorKind::Internal);
    }
}
