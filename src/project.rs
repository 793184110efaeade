use scanfold::template::ProblemParams;
use scanfold::ScanError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("template {name} was not found; add it to {dir}")]
    TemplateNotFound { name: String, dir: String },

    #[error("invalid problem name {0:?} (use letters, digits, '_' or '-')")]
    InvalidProblemName(String),

    #[error("{0} already exists (use --force to overwrite)")]
    DestinationExists(PathBuf),

    #[error("cannot read settings from {path}")]
    SettingsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {path}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid template pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot list templates: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

// Built-ins share one scanner, spliced in after the header.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "file.rs",
        concat!(
            include_str!("../templates/header.rs"),
            "\n",
            include_str!("../templates/scanner.rs"),
            include_str!("../templates/file.rs"),
        ),
    ),
    (
        "stdio.rs",
        concat!(
            include_str!("../templates/header.rs"),
            "\n",
            include_str!("../templates/scanner.rs"),
            include_str!("../templates/stdio.rs"),
        ),
    ),
];

pub fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|&&(builtin, _)| builtin == name)
        .map(|&(_, text)| text)
}

/// Finds project root directory, walking up from `start`.
pub fn project_root_path(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        trace!("Search project from {}", dir.display());
        dir.push("Cargo.toml");
        if fs::metadata(dir.as_path())
            .map(|meta| meta.is_file())
            .unwrap_or(false)
        {
            dir.pop();
            return Some(dir);
        }

        dir.pop();
        if !dir.pop() {
            return None;
        }
    }
}

/// Loads `name` from the user's template directory,
/// falling back to the built-in one.
pub fn load_template(dir: Option<&Path>, name: &str) -> Result<String, ProjectError> {
    if let Some(dir) = dir {
        let path = dir.join(name);
        if path.is_file() {
            debug!("use template {}", path.display());
            return Ok(fs::read_to_string(&path)?);
        }
    }

    match builtin_template(name) {
        Some(text) => {
            debug!("use built-in template {}", name);
            Ok(text.to_owned())
        }
        None => Err(ProjectError::TemplateNotFound {
            name: name.to_owned(),
            dir: dir
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "the templates directory".to_owned()),
        }),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Origin {
    Builtin,
    User(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateEntry {
    pub name: String,
    pub origin: Origin,
}

impl fmt::Display for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.origin {
            Origin::Builtin => write!(f, "{}\t(built-in)", self.name),
            Origin::User(path) => write!(f, "{}\t{}", self.name, path.display()),
        }
    }
}

/// Enumerates templates. A user template shadows the built-in of the same name.
pub fn list_templates(dir: Option<&Path>) -> Result<Vec<TemplateEntry>, ProjectError> {
    let mut entries = Vec::new();

    if let Some(dir) = dir {
        let pat = Path::new(&glob::Pattern::escape(&dir.to_string_lossy()))
            .join("*")
            .display()
            .to_string();
        trace!("collecting {}", pat);

        for path in glob::glob(&pat)? {
            let path = path?;
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            entries.push(TemplateEntry {
                name,
                origin: Origin::User(path),
            });
        }
    }

    for &(name, _) in BUILTIN_TEMPLATES {
        if entries.iter().all(|entry| entry.name != name) {
            entries.push(TemplateEntry {
                name: name.to_owned(),
                origin: Origin::Builtin,
            });
        }
    }

    entries.sort_by(|l, r| l.name.cmp(&r.name));
    Ok(entries)
}

/// Checks rendered Rust source parses and has `fn main`.
/// Problems are reported as warnings only.
pub fn check_rust_source(src: &str) -> bool {
    let file = match syn::parse_file(src) {
        Ok(file) => file,
        Err(err) => {
            warn!("rendered source does not parse: {}", err);
            return false;
        }
    };

    let has_main = file.items.iter().any(|item| match item {
        syn::Item::Fn(item) => item.sig.ident == "main",
        _ => false,
    });
    if !has_main {
        warn!("rendered source has no main function");
    }
    has_main
}

/// `src/bin/` of the enclosing Cargo project for Rust sources,
/// otherwise `cwd` itself.
pub fn default_destination(cwd: &Path, params: &ProblemParams) -> PathBuf {
    let source_file = params.source_file();
    if params.ext == "rs" {
        if let Some(root) = project_root_path(cwd) {
            return root.join("src").join("bin").join(source_file);
        }
    }
    cwd.join(source_file)
}

pub fn write_source(path: &Path, content: &str, force: bool) -> Result<(), ProjectError> {
    if path.exists() && !force {
        return Err(ProjectError::DestinationExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanfold::template::Mode;
    use tempfile::tempdir;

    fn params(prob: &str, mode: Mode) -> ProblemParams {
        ProblemParams {
            user: "vain0x".to_owned(),
            prob: prob.to_owned(),
            ext: "rs".to_owned(),
            mode,
            input_file: "$PROB.in".to_owned(),
            output_file: "$PROB.out".to_owned(),
        }
    }

    #[test]
    fn test_builtin_templates_render_to_valid_rust() {
        for &mode in &[Mode::Stdio, Mode::File] {
            let params = params("abc001_a", mode);
            let template = load_template(None, &params.template_name()).unwrap();
            let source = params.render(&template);

            assert!(!source.contains("$USER"));
            assert!(source.contains("abc001_a.rs"));
            assert!(check_rust_source(&source), "{}", source);
        }
    }

    #[test]
    fn test_file_template_names_io_files() {
        let params = params("gift1", Mode::File);
        let source = params.render(builtin_template("file.rs").unwrap());
        assert!(source.contains(r#"const INPUT: &str = "gift1.in";"#));
        assert!(source.contains(r#"const OUTPUT: &str = "gift1.out";"#));
    }

    #[test]
    fn test_file_template_escapes_io_paths() {
        let mut params = params("gift1", Mode::File);
        params.input_file = r#"C:\data\$PROB.in"#.to_owned();
        params.output_file = r#"say "$PROB".out"#.to_owned();

        let source = params.render(builtin_template("file.rs").unwrap());
        assert!(source.contains(r#"const INPUT: &str = "C:\\data\\gift1.in";"#));
        assert!(source.contains(r#"const OUTPUT: &str = "say \"gift1\".out";"#));
        assert!(check_rust_source(&source), "{}", source);
    }

    #[test]
    fn test_builtin_templates_embed_scanner() {
        let scanner = include_str!("../templates/scanner.rs");
        for name in &["stdio.rs", "file.rs"] {
            let text = builtin_template(name).unwrap();
            assert!(text.starts_with("//! $USER\n//! $SRCFILE\n"));
            assert!(text.contains(scanner));
        }
    }

    #[test]
    fn test_check_rust_source() {
        assert!(!check_rust_source("fn main( {"));
        assert!(!check_rust_source("fn solve() {}"));
        assert!(check_rust_source("fn main() {}"));
    }

    #[test]
    fn test_user_template_overrides_builtin() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("stdio.rs"), "// mine $PROB\nfn main() {}\n").unwrap();
        fs::write(dir.path().join("stdio.cpp"), "// $PROB\n").unwrap();

        let text = load_template(Some(dir.path()), "stdio.rs").unwrap();
        assert!(text.starts_with("// mine"));

        let names = list_templates(Some(dir.path()))
            .unwrap()
            .into_iter()
            .map(|entry| (entry.name, entry.origin == Origin::Builtin))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("file.rs".to_owned(), true),
                ("stdio.cpp".to_owned(), false),
                ("stdio.rs".to_owned(), false),
            ],
            names
        );
    }

    #[test]
    fn test_missing_template() {
        let dir = tempdir().unwrap();
        match load_template(Some(dir.path()), "stdio.java") {
            Err(ProjectError::TemplateNotFound { name, .. }) => assert_eq!("stdio.java", name),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_project_root_path() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

        let root = project_root_path(&nested).unwrap();
        assert_eq!(dir.path().canonicalize().unwrap(), root.canonicalize().unwrap());
    }

    #[test]
    fn test_default_destination() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();

        let dest = default_destination(dir.path(), &params("a", Mode::Stdio));
        assert_eq!(dir.path().join("src").join("bin").join("a.rs"), dest);

        let mut cpp = params("a", Mode::Stdio);
        cpp.ext = "cpp".to_owned();
        assert_eq!(dir.path().join("a.cpp"), default_destination(dir.path(), &cpp));
    }

    #[test]
    fn test_write_source_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("src/bin/a.rs");

        write_source(&path, "first", false).unwrap();
        match write_source(&path, "second", false) {
            Err(ProjectError::DestinationExists(p)) => assert_eq!(path, p),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!("first", fs::read_to_string(&path).unwrap());

        write_source(&path, "second", true).unwrap();
        assert_eq!("second", fs::read_to_string(&path).unwrap());
    }
}
