use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::Tab;

/// Read a script file, returning its display name and content verbatim.
pub fn read_script(path: &Path) -> Result<(String, String)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Script")
        .to_string();
    Ok((name, content))
}

/// Save target for a tab: its origin when it was opened from a file,
/// otherwise the display name with `.lua` appended when it has no extension.
pub fn save_file_name(tab: &Tab) -> String {
    if let Some(origin) = &tab.origin {
        return origin.clone();
    }
    if Path::new(&tab.name).extension().is_some() {
        tab.name.clone()
    } else {
        format!("{}.lua", tab.name)
    }
}

/// Write the tab's content under its save target in `dir`. Content is written
/// byte-for-byte; the caller marks the tab saved afterwards.
pub fn save_script(tab: &Tab, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(save_file_name(tab));
    fs::write(&path, &tab.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TabManager;

    #[test]
    fn save_name_prefers_origin() {
        let mut tabs = TabManager::new();
        let id = tabs.open("scripts/main.lua", String::new());
        assert_eq!(save_file_name(tabs.get(id).unwrap()), "scripts/main.lua");
    }

    #[test]
    fn save_name_appends_lua_when_no_extension() {
        let tabs = TabManager::new();
        assert_eq!(save_file_name(tabs.active()), "New Script.lua");
    }

    #[test]
    fn save_name_keeps_existing_extension() {
        let mut tabs = TabManager::new();
        let id = tabs.open("notes.txt", String::new());
        let mut tab = tabs.get(id).unwrap().clone();
        tab.origin = None;
        assert_eq!(save_file_name(&tab), "notes.txt");
    }
}
