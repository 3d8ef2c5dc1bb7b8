//! Writes a rendered skill package to disk.
//!
//! Writing is best-effort, not transactional: if a write fails part way,
//! files already written are left in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Result, SkillBuilderError};
use crate::fs_util::{make_executable, path_occupied};
use crate::models::SkillDescription;
use crate::template::template_files;

/// Outcome of a successful `create`.
#[derive(Debug)]
pub struct CreatedSkill {
    /// The new skill directory.
    pub dir: PathBuf,
    /// Paths written, relative to `dir`, in write order.
    pub files: Vec<&'static str>,
}

/// Create `<parent>/<name>` and write every package file into it.
pub fn create_skill(parent: &Path, desc: &SkillDescription) -> Result<CreatedSkill> {
    create_skill_with_progress(parent, desc, |_| {})
}

/// Like [`create_skill`], calling `on_file` with each relative path just
/// before it is written.
///
/// Returns [`SkillBuilderError::AlreadyExists`] without touching the
/// filesystem if the target directory is already present.
pub fn create_skill_with_progress<F>(
    parent: &Path,
    desc: &SkillDescription,
    mut on_file: F,
) -> Result<CreatedSkill>
where
    F: FnMut(&str),
{
    let dir = parent.join(&desc.name);
    if path_occupied(&dir) {
        return Err(SkillBuilderError::AlreadyExists { path: dir });
    }

    // Render before creating anything so a rendering failure leaves no trace.
    let rendered = template_files(desc)?;

    create_dir(&dir)?;
    create_dir(&dir.join("examples"))?;

    let mut files = Vec::with_capacity(rendered.len());
    for file in rendered {
        on_file(file.path);
        let path = dir.join(file.path);
        std::fs::write(&path, &file.content).map_err(|source| SkillBuilderError::Write {
            path: path.clone(),
            source,
        })?;
        if file.executable {
            make_executable(&path)
                .map_err(|source| SkillBuilderError::Write { path: path.clone(), source })?;
        }
        debug!(path = %path.display(), executable = file.executable, "wrote file");
        files.push(file.path);
    }

    Ok(CreatedSkill { dir, files })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir(path).map_err(|source| SkillBuilderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
