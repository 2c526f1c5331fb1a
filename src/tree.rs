/*! Bracketed constituency tree flattening.

SST annotations come as one bracketed tree per line, e.g.
`(3 (2 great) (2 movie))`. Flattening keeps the root label and the leaf
tokens in left-to-right order, restoring the `-LRB-`/`-RRB-` bracket
placeholders used inside trees to literal `(`/`)`.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::corpus::Label;
use crate::error::Error;

#[derive(Debug, PartialEq)]
enum Token {
    Open,
    Close,
    Atom(String),
}

fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut atom = String::new();
    for c in line.chars() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if !atom.is_empty() {
                tokens.push(Token::Atom(std::mem::take(&mut atom)));
            }
            match c {
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _ => (),
            }
        } else {
            atom.push(c);
        }
    }
    if !atom.is_empty() {
        tokens.push(Token::Atom(atom));
    }
    tokens
}

fn restore_brackets(leaf: &str) -> String {
    match leaf {
        "-LRB-" => "(".to_string(),
        "-RRB-" => ")".to_string(),
        _ => leaf.to_string(),
    }
}

/// Flatten one bracketed tree into its root label and leaf tokens.
///
/// Within a node, the first atom is the node label and every following atom
/// is a leaf. Unbalanced parentheses, atoms outside of any node, a missing
/// root label or trailing content all fail with [Error::Parse].
pub fn flatten(line: &str) -> Result<(Label, Vec<String>), Error> {
    let mut tokens = tokenize(line).into_iter();

    match tokens.next() {
        Some(Token::Open) => (),
        _ => return Err(Error::Parse(format!("tree must start with '(': {:?}", line))),
    }

    let root_label = match tokens.next() {
        Some(Token::Atom(label)) => label.parse::<Label>()?,
        _ => return Err(Error::Parse(format!("tree without root label: {:?}", line))),
    };

    let mut depth = 1usize;
    let mut leaves = Vec::new();
    // tracks whether the current node has seen its label atom yet
    let mut expect_label = false;

    for token in tokens.by_ref() {
        match token {
            Token::Open => {
                depth += 1;
                expect_label = true;
            }
            Token::Close => {
                if expect_label {
                    return Err(Error::Parse(format!("empty node in tree: {:?}", line)));
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Token::Atom(atom) => {
                if expect_label {
                    expect_label = false;
                } else {
                    leaves.push(restore_brackets(&atom));
                }
            }
        }
    }

    if depth != 0 {
        return Err(Error::Parse(format!("unbalanced tree: {:?}", line)));
    }
    if tokens.next().is_some() {
        return Err(Error::Parse(format!(
            "trailing content after tree: {:?}",
            line
        )));
    }

    Ok((root_label, leaves))
}

/// Flatten a whole tree file into a flat `label<TAB>sentence` corpus.
pub fn flatten_file(src: &Path, dst: &Path) -> Result<usize, Error> {
    info!("flattening trees from {:?}", src);
    let reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst)?);

    let written = flatten_stream(reader, &mut writer)?;
    writer.flush()?;

    info!("flattening done, {} trees", written);
    Ok(written)
}

fn flatten_stream<R: Read, W: Write>(reader: BufReader<R>, writer: &mut W) -> Result<usize, Error> {
    let mut written = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (label, leaves) = flatten(&line)?;
        writeln!(writer, "{}\t{}", label, leaves.iter().join(" "))?;
        written += 1;
    }
    Ok(written)
}
