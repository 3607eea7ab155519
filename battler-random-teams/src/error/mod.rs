mod context;
mod error;
mod generation_error;

pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use generation_error::{
    GeneralError,
    GenerationExhaustedError,
    InsufficientPoolError,
    NotFoundError,
    UnsupportedFormatError,
    general_error,
    generation_exhausted_error,
    insufficient_pool_error,
    not_found_error,
    unsupported_format_error,
};
