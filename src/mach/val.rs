use std::rc::Rc;

/// ## Runtime value

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
}

impl Val {
    pub fn is_number(&self) -> bool {
        matches!(self, Val::Integer(_) | Val::Float(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Val::Integer(n) => *n == 0,
            Val::Float(n) => *n == 0.0,
            Val::String(_) => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "integer",
            Val::Float(_) => "float",
            Val::String(_) => "string",
        }
    }
}

impl Default for Val {
    fn default() -> Val {
        Val::Integer(0)
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Float(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => write!(f, "{}", format_float(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

/// Shortest round-trip form that always reads back as a float:
/// `5.0`, `0.1`, `1e+20`, `1.5e-07`.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = n.abs();
    if abs != 0.0 && (abs >= 1e16 || abs < 1e-4) {
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => s,
        };
    }
    let s = n.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
