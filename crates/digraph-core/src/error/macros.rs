//! Error macros for digraph

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_argument(
            $context, $value,
        ))
    };
}

/// Macro for returning not found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::not_found($context, $value))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
