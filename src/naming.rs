use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    error::{MergeError, MergeResult},
    layout::Orientation,
    source::SourceFormat,
};

/// Turn the user supplied base into `<stem>_<TAG>.<ext>`, next to wherever the
/// base points. An extension that already matches the output format is dropped
/// so `scenery.png` and `scenery` name the same file.
pub fn output_path(base: &Path, orientation: Orientation, format: SourceFormat) -> MergeResult<PathBuf>{
    let invalid = || MergeError::InvalidOutput{ path: base.to_path_buf() };

    // `Path` looks through a trailing separator or `.`, we don't
    if base.as_os_str().is_empty() || ends_with_separator(base) || ends_with_cur_dir(base) {
        return Err(invalid());
    }
    let name = base.file_name().ok_or_else(invalid)?;

    let stem = match base.extension().and_then(|e| e.to_str()){
        Some(ext) if format.owns_extension(ext) => base.file_stem().unwrap_or(name),
        _ => name,
    };

    let mut file = OsString::from(stem);
    file.push("_");
    file.push(orientation.tag());
    file.push(".");
    file.push(format.extension());

    Ok(base.with_file_name(file))
}

fn ends_with_separator(path: &Path) -> bool{
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

fn ends_with_cur_dir(path: &Path) -> bool{
    let text = path.as_os_str().to_string_lossy();
    match text.strip_suffix('.'){
        Some(rest) => rest.is_empty() || rest.ends_with(std::path::is_separator),
        None => false,
    }
}
