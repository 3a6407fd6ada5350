use super::Val;
use crate::error;
use crate::lang::{token::Operator, Error};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 + r)),
            (Float(l), Integer(r)) => Ok(Float(l + r as f64)),
            (Float(l), Float(r)) => Ok(Float(l + r)),
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            (l, r) => Err(Self::mismatch("addition", &l, &r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 - r)),
            (Float(l), Integer(r)) => Ok(Float(l - r as f64)),
            (Float(l), Float(r)) => Ok(Float(l - r)),
            (l, r) => Err(Self::mismatch("subtraction", &l, &r)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 * r)),
            (Float(l), Integer(r)) => Ok(Float(l * r as f64)),
            (Float(l), Float(r)) => Ok(Float(l * r)),
            (String(s), Integer(n)) | (Integer(n), String(s)) => Self::repeat(&s, n),
            (l, r) => Err(Self::mismatch("multiplication", &l, &r)),
        }
    }

    /// Zero divisors are rejected before operand types are considered.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(l as f64 / r)),
            (Float(l), Integer(r)) => Ok(Float(l / r as f64)),
            (Float(l), Float(r)) => Ok(Float(l / r)),
            (l, r) => Err(Self::mismatch("division", &l, &r)),
        }
    }

    pub fn compare(op: Operator, lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        let ordering = match (lhs, rhs) {
            (Integer(l), Integer(r)) => Some(l.cmp(r)),
            (Integer(l), Float(r)) => (*l as f64).partial_cmp(r),
            (Float(l), Integer(r)) => l.partial_cmp(&(*r as f64)),
            (Float(l), Float(r)) => l.partial_cmp(r),
            (String(l), String(r)) => Some(l.cmp(r)),
            _ => {
                return Err(error!(TypeMismatch; format!(
                    "Cannot compare {} with {}",
                    lhs.type_name(),
                    rhs.type_name()
                )))
            }
        };
        let ordering = match ordering {
            Some(o) => o,
            None => return Ok(op == Operator::NotEqual),
        };
        use Operator::*;
        Ok(match op {
            Equal => ordering == Ordering::Equal,
            NotEqual => ordering != Ordering::Equal,
            Less => ordering == Ordering::Less,
            LessEqual => ordering != Ordering::Greater,
            Greater => ordering == Ordering::Greater,
            GreaterEqual => ordering != Ordering::Less,
        })
    }

    fn repeat(s: &str, n: i64) -> Result<Val> {
        if n <= 0 {
            return Ok(Val::String("".into()));
        }
        let count = n as usize;
        match s.len().checked_mul(count) {
            Some(len) if len <= u32::MAX as usize => Ok(Val::String(s.repeat(count).into())),
            _ => Err(error!(Overflow; "String too long")),
        }
    }

    fn mismatch(operation: &str, lhs: &Val, rhs: &Val) -> Error {
        error!(TypeMismatch; format!(
            "Invalid {}: {} and {}",
            operation,
            lhs.type_name(),
            rhs.type_name()
        ))
    }
}
