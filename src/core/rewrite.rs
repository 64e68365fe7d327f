//! Template rewriter: migrate module include paths to snake_case.
//!
//! Walks a theme directory, finds `*.hubl.html` templates, and rewrites
//! every `../components/modules/CamelCase` reference in their content to
//! the snake_case module name, in place:
//! 1. Collects candidate templates by compound suffix
//! 2. Applies a global regex substitution to each template's content
//! 3. Writes back only files whose content actually changed
//! 4. Returns the rewritten paths in processing order

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::snake::camel_to_snake;

/// Compound suffix that marks a candidate template. Files without it are
/// never opened.
pub const TEMPLATE_SUFFIX: &str = ".hubl.html";

/// Literal prefix of a module include path. Only identifiers directly
/// after this prefix are rewritten.
pub const MODULE_PATH_PREFIX: &str = "../components/modules/";

fn module_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!("({})([A-Z][a-zA-Z0-9]+)", regex::escape(MODULE_PATH_PREFIX));
        Regex::new(&pattern).unwrap()
    })
}

/// Rewrite every module include path in `content` to snake_case.
///
/// Matching is global; each uppercase-led identifier following the
/// module path prefix is converted independently. Everything else in the
/// content, including identical-looking identifiers without the prefix,
/// is left byte-for-byte untouched.
pub fn rewrite_module_paths(content: &str) -> String {
    module_ref_re()
        .replace_all(content, |caps: &Captures| {
            format!("{}{}", &caps[1], camel_to_snake(&caps[2]))
        })
        .into_owned()
}

fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEMPLATE_SUFFIX))
}

fn walk_templates(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_templates(&path, files);
        } else if is_candidate(&path) {
            files.push(path);
        }
    }
}

fn read_template(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::Decode {
        path: path.to_path_buf(),
    })
}

/// Process every `*.hubl.html` template under `base_path`.
///
/// Returns the paths that were rewritten, in processing order, printing
/// a `Processed:` line for each as it is written. Templates whose module
/// paths are already snake_case are not written and not reported.
///
/// The run stops at the first read, decode, or write failure; earlier
/// rewrites stay on disk.
pub fn process(base_path: &Path) -> Result<Vec<PathBuf>> {
    if !base_path.is_dir() {
        return Err(Error::NotADirectory(base_path.to_path_buf()));
    }

    let mut templates = Vec::new();
    walk_templates(base_path, &mut templates);

    let mut updated = Vec::new();
    for path in templates {
        let content = read_template(&path)?;
        let modified = rewrite_module_paths(&content);

        if modified != content {
            fs::write(&path, &modified).map_err(|e| Error::io(&path, e))?;
            println!("Processed: {}", path.display());
            updated.push(path);
        }
    }

    Ok(updated)
}
