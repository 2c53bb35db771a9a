use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Writes one file's bytes to a new destination path.
pub trait Copier {
    /// Copy `src` to `dst`. Must fail with `ErrorKind::AlreadyExists`
    /// instead of overwriting an existing `dst`.
    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()>;
}

/// Plain filesystem copy with create-exclusive open of the destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl Copier for FsCopier {
    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let mut reader = File::open(src)?;
        let mut writer = OpenOptions::new().write(true).create_new(true).open(dst)?;

        let copied = io::copy(&mut reader, &mut writer).and_then(|_| writer.sync_all());
        if let Err(e) = copied {
            drop(writer);
            // Don't leave a truncated file behind: it would read as a duplicate next run.
            let _ = fs::remove_file(dst);
            return Err(e);
        }

        if let Ok(meta) = reader.metadata() {
            let _ = fs::set_permissions(dst, meta.permissions());
        }
        Ok(())
    }
}
