use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::report::errors::Error;
use crate::report::Result;

pub(crate) fn read_file_content(file: File) -> std::result::Result<String, std::io::Error> {
    let mut file_content = String::new();
    let mut buf_reader = BufReader::new(file);
    buf_reader.read_to_string(&mut file_content)?;
    Ok(file_content)
}

pub(crate) fn validate_path(base: &str) -> Result<()> {
    match Path::new(base).exists() {
        true => Ok(()),
        false => Err(Error::FileNotFoundError(base.to_string())),
    }
}

pub(crate) fn alphabetical(first: &DirEntry, second: &DirEntry) -> Ordering {
    first.file_name().cmp(&second.file_name())
}

pub(crate) fn get_files_with_filter<S, F>(
    file: &str,
    sort: S,
    filter: F,
) -> Result<Vec<PathBuf>>
where
    S: FnMut(&DirEntry, &DirEntry) -> Ordering + Send + Sync + 'static,
    F: Fn(&DirEntry) -> bool,
{
    let mut selected = Vec::with_capacity(10);
    let walker = WalkDir::new(file).sort_by(sort).into_iter();
    let dir_check = |entry: &DirEntry| {
        // select directories to traverse
        if entry.path().is_dir() {
            return true;
        }
        filter(entry)
    };
    for entry in walker.filter_entry(dir_check).flatten() {
        if entry.path().is_file() {
            selected.push(entry.into_path());
        }
    }

    Ok(selected)
}
