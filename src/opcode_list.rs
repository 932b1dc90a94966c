// This module reads the opcode list that drives the command line generator. The format is
// line oriented: each entry is "<code> <name>", the code in decimal or 0x-prefixed hex, '#'
// starts a comment and blank lines are ignored. Entries are returned in file order since that
// is the order the handlers are emitted in. Duplicate codes or names are rejected because two
// handlers with the same label or the same table slot cannot both be assembled.

//! Opcode list files.

use crate::core::context::Opcode;
use crate::core::error::{GenError, GenResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse an opcode list from `text`.
pub fn parse_opcode_list(text: &str) -> GenResult<Vec<Opcode>> {
    let mut opcodes = Vec::new();
    let mut codes = HashSet::new();
    let mut names = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let err = |reason: String| GenError::OpcodeList { line, reason };

        let mut fields = content.split_whitespace();
        let (code_field, name) = match (fields.next(), fields.next(), fields.next()) {
            (Some(code), Some(name), None) => (code, name),
            _ => return Err(err(format!("expected `<code> <name>`, found `{}`", content))),
        };

        let code = parse_code(code_field)
            .ok_or_else(|| err(format!("invalid opcode number `{}`", code_field)))?;

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(err(format!("invalid opcode name `{}`", name)));
        }
        if !codes.insert(code) {
            return Err(err(format!("duplicate opcode number {:#04x}", code)));
        }
        if !names.insert(name.to_string()) {
            return Err(err(format!("duplicate opcode name `{}`", name)));
        }

        opcodes.push(Opcode::new(code, name));
    }

    Ok(opcodes)
}

/// Read and parse the opcode list at `path`.
pub fn load_opcode_list(path: &Path) -> GenResult<Vec<Opcode>> {
    let text = fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let opcodes = parse_opcode_list(&text)?;
    log::debug!("Loaded {} opcodes from {}", opcodes.len(), path.display());
    Ok(opcodes)
}

fn parse_code(field: &str) -> Option<u16> {
    match field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => field.parse().ok(),
    }
}
