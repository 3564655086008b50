use std::fs::{File, OpenOptions};
use std::path::Path;
use crate::core::error::{Error, ErrorKind, Result};

pub const LOCK_FILE: &str = ".lock";

/// Single owner guarantee for the data directory
pub struct DataDirLock {
    pub file: File,
}

impl DataDirLock {
    pub fn acquire(data_dir: &Path) -> Result<Self> {
        let lock_path = data_dir.join(LOCK_FILE);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;

        // Platform-specific locking
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            use libc::{flock, LOCK_EX, LOCK_NB};

            let fd = file.as_raw_fd();

            unsafe {
                if flock(fd, LOCK_EX | LOCK_NB) != 0 {
                    return Err(Error {
                        kind: ErrorKind::Locked,
                        context: format!(
                            "data directory {} is in use by another server",
                            data_dir.display()
                        ),
                    });
                }
            }
        }

        Ok(DataDirLock { file })
    }
}

impl Drop for DataDirLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            use libc::{flock, LOCK_UN};

            let fd = self.file.as_raw_fd();
            unsafe {
                flock(fd, LOCK_UN);
            }
        }
    }
}
