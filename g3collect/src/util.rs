/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

/// Call `f` on each line of the file, without the line ending.
///
/// Stops at the first error returned by `f`.
pub fn read_lines<F>(path: &Path, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str) -> anyhow::Result<()>,
{
    let file = File::open(path).context(format!("failed to open file {}", path.display()))?;
    for line in BufReader::new(file).lines() {
        let line = line.context(format!("failed to read file {}", path.display()))?;
        f(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("g3collect-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn all_lines() {
        let path = temp_file("all_lines", "a\nb\r\n\nc");
        let mut lines = Vec::new();
        read_lines(&path, |l| {
            lines.push(l.to_string());
            Ok(())
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn early_exit() {
        let path = temp_file("early_exit", "a\nb\nc\n");
        let mut count = 0;
        let r = read_lines(&path, |l| {
            count += 1;
            if l == "b" { Err(anyhow!("stop")) } else { Ok(()) }
        });
        std::fs::remove_file(&path).unwrap();
        assert!(r.is_err());
        assert_eq!(count, 2);
    }

    #[test]
    fn missing() {
        assert!(read_lines(Path::new("/nonexistent/file"), |_| Ok(())).is_err());
    }
}
