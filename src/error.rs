use std::path::PathBuf;
use std::time::SystemTimeError;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    // The system clock reports an instant before the Unix epoch.
    #[error("cannot load the system clock")]
    CannotLoadClock(#[source] SystemTimeError),

    #[error("cannot create file {}", path.display())]
    CannotCreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write file {}", path.display())]
    CannotWriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
