pub mod source_buffer;

pub use source_buffer::SourceBuffer;

/// Builds an in-memory [SourceBuffer] named after the call site, for tests.
#[macro_export]
macro_rules! snippet {
    ( $s:literal ) => {
        &$crate::highlight::source::SourceBuffer::new_from_string(
            $s,
            $crate::const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
