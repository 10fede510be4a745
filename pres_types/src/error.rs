use std::fmt;

use thiserror::Error;

/// Error type for failures of [`Validatable::validate`](crate::utils::validation::Validatable).
#[derive(Debug, Default, Error)]
pub struct ValidationError {
    pub context: Option<String>,
}

impl ValidationError {
    pub fn from_msg<T: Into<String>>(msg: T) -> Self {
        Self::from(msg.into())
    }
}

impl From<&str> for ValidationError {
    fn from(context: &str) -> Self {
        Self {
            context: Some(context.to_owned()),
        }
    }
}

impl From<String> for ValidationError {
    fn from(context: String) -> Self {
        Self {
            context: Some(context),
        }
    }
}

impl From<ValidationError> for String {
    fn from(s: ValidationError) -> Self {
        s.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error")?;
        match self.context {
            Some(ref context) => write!(f, ": {context}"),
            None => Ok(()),
        }
    }
}

#[macro_export]
macro_rules! invalid {
    ($($args:tt)+) => {
        $crate::ValidationError::from(format!($($args)+))
    };
}
