use std::fs::File;
use std::io::Read;

use bstr::ByteSlice;

use crate::Error;

enum SourceBufferKind<'a> {
    /// A memory-mapped file already checked to be valid utf-8.
    File { buffer: mmap_rs::Mmap },
    Memory { string: &'a str },
    /// Owned text, either read from a stream or decoded lossily from a file that was not valid
    /// utf-8.
    Owned { string: String },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps `file_path` into memory. Invalid utf-8 sequences are replaced with U+FFFD, so the
    /// tokenizer always sees well-formed text.
    pub fn new_from_file(file_path: &std::path::Path) -> Result<SourceBuffer<'static>, Error> {
        let file_name = file_path.display().to_string();
        let file = File::open(file_path)?;
        let len = usize::try_from(File::metadata(&file)?.len())
            .map_err(|_| Error::FileTooLarge(file_name.clone()))?;

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Owned { string: String::new() }, file_name });
        }

        let buffer = unsafe { mmap_rs::MmapOptions::new(len)?.with_file(&file, 0).map()? };
        if std::str::from_utf8(buffer.as_slice()).is_ok() {
            tracing::debug!(file = %file_name, bytes = len, "mapped source file");
            return Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name });
        }

        tracing::warn!(file = %file_name, "source is not valid utf-8, decoding lossily");
        let string = buffer.as_slice().to_str_lossy().into_owned();
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { string }, file_name })
    }

    pub fn new_from_reader(
        reader: &mut impl Read,
        name: &str,
    ) -> Result<SourceBuffer<'static>, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let string = match String::from_utf8(bytes) {
            Ok(string) => string,
            Err(e) => {
                tracing::warn!(file = name, "input is not valid utf-8, decoding lossily");
                e.as_bytes().to_str_lossy().into_owned()
            }
        };
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { string }, file_name: String::from(name) })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        let file_name = String::from(name);
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name }
    }

    pub fn code(&self) -> &'_ str {
        match &self.kind {
            // We validated the mapped bytes as utf-8 when constructing the buffer, and the
            // mapping is read-only.
            SourceBufferKind::File { buffer } => unsafe {
                std::str::from_utf8_unchecked(buffer.as_slice())
            },
            SourceBufferKind::Memory { string } => *string,
            SourceBufferKind::Owned { string } => string.as_str(),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
