use std::path::PathBuf;

/// Fresh empty directory under the OS temp dir.
pub fn tmp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boj-core-test-{}", rand::random::<u64>()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
