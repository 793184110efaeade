//! Placeholder substitution for solution templates.
//!
//! Placeholders are `$NAME` or `${NAME}`. `$$` stands for a literal `$`.
//! Names missing from the mapping are left as they are.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type Mapping = BTreeMap<String, String>;

fn is_name_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

fn is_name_char(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Length of the placeholder name at the head of `s`.
fn name_len(s: &[u8]) -> usize {
    match s.first() {
        Some(&b) if is_name_start(b) => s.iter().take_while(|&&b| is_name_char(b)).count(),
        _ => 0,
    }
}

pub fn substitute(text: &str, mapping: &Mapping) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while let Some(offset) = bytes[copied..].iter().position(|&b| b == b'$') {
        let at = copied + offset;
        out.push_str(&text[copied..at]);

        let rest = &bytes[at + 1..];
        let (replacement, end) = match rest.first() {
            Some(&b'$') => (Some("$"), at + 2),
            Some(&b'{') => {
                let len = name_len(&rest[1..]);
                if len > 0 && rest.get(1 + len) == Some(&b'}') {
                    let name = &text[at + 2..at + 2 + len];
                    (mapping.get(name).map(String::as_str), at + 3 + len)
                } else {
                    (None, at + 1)
                }
            }
            _ => match name_len(rest) {
                0 => (None, at + 1),
                len => {
                    let name = &text[at + 1..at + 1 + len];
                    (mapping.get(name).map(String::as_str), at + 1 + len)
                }
            },
        };

        match replacement {
            Some(value) => {
                out.push_str(value);
                copied = end;
            }
            None => {
                out.push('$');
                copied = at + 1;
            }
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// I/O flavor of a solution: standard streams or named files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Stdio,
    File,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Stdio
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Stdio => "stdio",
            Mode::File => "file",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "stdio" => Ok(Mode::Stdio),
            "file" => Ok(Mode::File),
            _ => Err(format!("unknown mode {:?} (expected stdio or file)", s)),
        }
    }
}

/// Problem names end up in file names.
pub fn is_valid_problem_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[derive(Clone, Debug)]
pub struct ProblemParams {
    pub user: String,
    pub prob: String,
    pub ext: String,
    pub mode: Mode,
    /// Pattern of the input file name, e.g. `$PROB.in`.
    pub input_file: String,
    pub output_file: String,
}

impl ProblemParams {
    pub fn template_name(&self) -> String {
        format!("{}.{}", self.mode, self.ext)
    }

    pub fn source_file(&self) -> String {
        format!("{}.{}", self.prob, self.ext)
    }

    pub fn mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("USER".to_owned(), self.user.clone());
        mapping.insert("PROB".to_owned(), self.prob.clone());
        mapping.insert("EXT".to_owned(), self.ext.clone());
        mapping.insert("MODE".to_owned(), self.mode.to_string());
        mapping.insert("SRCFILE".to_owned(), self.source_file());

        // File name patterns may refer to the names above.
        let infile = substitute(&self.input_file, &mapping);
        let outfile = substitute(&self.output_file, &mapping);

        // Quoted and escaped, for pasting into string literals.
        mapping.insert("INFILE_LIT".to_owned(), format!("{:?}", infile));
        mapping.insert("OUTFILE_LIT".to_owned(), format!("{:?}", outfile));
        mapping.insert("INFILE".to_owned(), infile);
        mapping.insert("OUTFILE".to_owned(), outfile);
        mapping
    }

    pub fn render(&self, template: &str) -> String {
        substitute(template, &self.mapping())
    }
}
