// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::process::{Child, Command};

/// 打开报告文件
///
/// 文件存在时交给系统默认查看器，不存在时什么都不做。
/// 返回是否真正发起了打开动作。
pub fn open_report(path: &Path) -> bool {
    if !path.exists() {
        tracing::debug!("Report {} not found, nothing to open", path.display());
        return false;
    }

    match open_with_default_viewer(path) {
        Ok(_) => {
            tracing::info!("Opening report: {}", path.display());
            true
        }
        Err(e) => {
            tracing::warn!("Failed to open report {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn open_with_default_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("xdg-open").arg(path).spawn()
}

#[cfg(target_os = "macos")]
fn open_with_default_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("open").arg(path).spawn()
}

#[cfg(target_os = "windows")]
fn open_with_default_viewer(path: &Path) -> std::io::Result<Child> {
    Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_with_default_viewer(_path: &Path) -> std::io::Result<Child> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no default viewer on this platform",
    ))
}
