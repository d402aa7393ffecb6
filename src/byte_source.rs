use std::fs::File;
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::FileExt;
#[cfg(not(unix))]
use std::{
    io::{Read, Seek, SeekFrom},
    sync::Mutex,
};

/// The byte region backing an open database.
///
/// Every variant serves `read(offset, length)` without a shared cursor, so
/// a handle can run lookups from many threads at once: positional reads on
/// Unix, a mutex around seek+read elsewhere, or pure slices of a buffer
/// preloaded at open.
#[derive(Debug)]
pub(crate) enum ByteSource {
    #[cfg(unix)]
    Positional { file: File, len: u64 },
    #[cfg(not(unix))]
    Locked { file: Mutex<File>, len: u64 },
    Preloaded(Vec<u8>),
}

impl ByteSource {
    /// Open `path`, preloading the whole file into memory when asked.
    pub(crate) fn open(path: &Path, preload: bool) -> io::Result<ByteSource> {
        if preload {
            return Ok(ByteSource::Preloaded(std::fs::read(path)?));
        }
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        #[cfg(unix)]
        {
            Ok(ByteSource::Positional { file, len })
        }
        #[cfg(not(unix))]
        {
            Ok(ByteSource::Locked {
                file: Mutex::new(file),
                len,
            })
        }
    }

    /// Total length of the region in bytes.
    pub(crate) fn len(&self) -> u64 {
        match self {
            #[cfg(unix)]
            ByteSource::Positional { len, .. } => *len,
            #[cfg(not(unix))]
            ByteSource::Locked { len, .. } => *len,
            ByteSource::Preloaded(buf) => buf.len() as u64,
        }
    }

    /// Read exactly `length` bytes at `offset`.
    pub(crate) fn read(&self, offset: u64, length: usize) -> io::Result<Vec<u8>> {
        match self {
            #[cfg(unix)]
            ByteSource::Positional { file, .. } => {
                let mut buf = vec![0u8; length];
                file.read_exact_at(&mut buf, offset)?;
                Ok(buf)
            }
            #[cfg(not(unix))]
            ByteSource::Locked { file, .. } => {
                let mut guard = file
                    .lock()
                    .map_err(|_| io::Error::new(io::ErrorKind::Other, "reader lock poisoned"))?;
                guard.seek(SeekFrom::Start(offset))?;
                let mut buf = vec![0u8; length];
                guard.read_exact(&mut buf)?;
                Ok(buf)
            }
            ByteSource::Preloaded(data) => {
                let start = usize::try_from(offset)
                    .map_err(|_| io::Error::from(io::ErrorKind::UnexpectedEof))?;
                let end = start
                    .checked_add(length)
                    .filter(|&end| end <= data.len())
                    .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
                Ok(data[start..end].to_vec())
            }
        }
    }

    /// Read up to `length` bytes at `offset`, clamped to the end of the
    /// region. Returns an empty buffer for offsets at or past the end.
    pub(crate) fn read_at_most(&self, offset: u64, length: usize) -> io::Result<Vec<u8>> {
        let total = self.len();
        if offset >= total {
            return Ok(Vec::new());
        }
        let available = usize::try_from(total - offset)
            .map(|avail| avail.min(length))
            .unwrap_or(length);
        self.read(offset, available)
    }
}
