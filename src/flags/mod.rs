mod reserved;


pub use reserved::{ReservedFlag, validate_no_reserved_flags};
