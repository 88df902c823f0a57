use log::debug;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Calculates the SHA256 hash of a file.
pub fn file_digest(path: &Path) -> Result<String, io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192]; // 8KB buffer
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Copies `from` to `to` byte-for-byte and confirms both files hash the same.
pub fn copy_verified(from: &Path, to: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::copy(from, to)?;
    let source_digest = file_digest(from)?;
    let copy_digest = file_digest(to)?;
    if source_digest != copy_digest {
        return Err(format!(
            "copy of {} to {} is not byte-identical",
            from.display(),
            to.display()
        )
        .into());
    }
    debug!("copied {} -> {} ({copy_digest})", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("icongen_test_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_file_digest_of_empty_file() {
        let path = temp_path("empty.bin");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            file_digest(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_copy_verified_produces_identical_bytes() {
        let from = temp_path("copy_src.bin");
        let to = temp_path("copy_dst.bin");
        fs::write(&from, b"raw png bytes under a container extension").unwrap();
        copy_verified(&from, &to).unwrap();
        assert_eq!(fs::read(&from).unwrap(), fs::read(&to).unwrap());
        assert_eq!(file_digest(&from).unwrap(), file_digest(&to).unwrap());
        fs::remove_file(&from).unwrap();
        fs::remove_file(&to).unwrap();
    }

    #[test]
    fn test_copy_verified_fails_when_source_is_missing() {
        let from = temp_path("no_such_source.bin");
        let to = temp_path("no_such_dest.bin");
        assert!(copy_verified(&from, &to).is_err());
    }
}
