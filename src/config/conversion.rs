use crate::{CfgError, Value};

impl TryFrom<Value> for String {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            _ => Err(CfgError::TypeError {
                message: format!("Expected string, got {}", value.type_name()),
                hint: Some("Use a quoted string value in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            _ => Err(CfgError::TypeError {
                message: format!("Expected integer, got {}", value.type_name()),
                hint: Some("Use an integer value in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        i32::try_from(value).map(i64::from)
    }
}

impl TryFrom<Value> for u16 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => u16::try_from(n).map_err(|_| CfgError::TypeError {
                message: format!("Integer {} out of range for u16", n),
                hint: Some("Use a number between 0 and 65535".into()),
            }),
            _ => Err(CfgError::TypeError {
                message: format!("Expected integer, got {}", value.type_name()),
                hint: Some("Use an integer value in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => u32::try_from(n).map_err(|_| CfgError::TypeError {
                message: format!("Integer {} out of range for u32", n),
                hint: Some("Use a non-negative integer".into()),
            }),
            _ => Err(CfgError::TypeError {
                message: format!("Expected integer, got {}", value.type_name()),
                hint: Some("Use an integer value in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(x) => Ok(x),
            // integers widen losslessly
            Value::Int(n) => Ok(n as f64),
            _ => Err(CfgError::TypeError {
                message: format!("Expected number, got {}", value.type_name()),
                hint: Some("Use a number value in your config".into()),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|x| x as f32)
    }
}

impl TryFrom<Value> for bool {
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(CfgError::TypeError {
                message: format!("Expected boolean, got {}", value.type_name()),
                hint: Some("Use true or false in your config".into()),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = CfgError>,
{
    type Error = CfgError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => {
                let mut result = Vec::with_capacity(list.len());
                for item in list.values {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(CfgError::TypeError {
                message: format!("Expected list, got {}", value.type_name()),
                hint: Some("Use a (...) list in your config".into()),
            }),
        }
    }
}
