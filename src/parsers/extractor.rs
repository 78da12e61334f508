//! Per-file declaration extraction
//!
//! A line-oriented scanner that recovers record types, type aliases,
//! receiver-bound functions, and loose top-level declarations from
//! comment-stripped source text. It is deliberately not a parser: it walks
//! declaration windows with an explicit state machine and a brace-depth
//! counter, which is enough to recover the structural shape of well-formed
//! source without a compiler.
//!
//! Extraction is pass 1 of the pipeline. Function bodies are captured here
//! but scanned for usage only in pass 2, once every module's type index is
//! complete.

use crate::error::{GopumlError, Result};
use crate::models::{capitalize, Entity, EntityKind, FunctionBody};
use crate::parsers::imports;
use std::collections::BTreeMap;

/// Everything one file contributes to its module
#[derive(Debug, Default)]
pub struct FileOutcome {
    /// Alias -> normalized root-relative module path
    pub imports: BTreeMap<String, String>,
    /// Entities declared (or coined as placeholders) in this file
    pub entities: BTreeMap<String, Entity>,
    /// Declared symbol name -> owning entity name
    pub type_index: BTreeMap<String, String>,
    /// Captured function bodies for the usage-scanning pass
    pub bodies: Vec<FunctionBody>,
}

/// Scanner state between lines
enum State {
    /// At the top level, looking for the next declaration
    Seek,
    /// Inside a parenthesized `import ( ... )` block
    ImportBlock,
    /// Inside a struct body, collecting field lines
    RecordBody { name: String, depth: i32 },
    /// Inside a function, capturing body lines for usage scanning
    FunctionBody {
        owner: String,
        depth: i32,
        lines: Vec<String>,
    },
    /// Inside a grouped `var ( ... )` / `const ( ... )` block
    VarBlock,
    /// Inside a braced region we don't model (interface bodies, composite
    /// initializers)
    SkipBlock { depth: i32 },
}

/// Line scanner that turns one file's text into a [`FileOutcome`]
pub struct Extractor<'a> {
    file: &'a str,
    global_name: String,
    outcome: FileOutcome,
}

impl<'a> Extractor<'a> {
    /// Extract the declarations of one comment-stripped source file
    pub fn extract(file: &'a str, module_path: &str, source: &str) -> Result<FileOutcome> {
        let leaf = module_path.rsplit('/').next().unwrap_or(module_path);
        let mut extractor = Extractor {
            file,
            global_name: format!("{}Global", capitalize(leaf)),
            outcome: FileOutcome::default(),
        };

        let mut state = State::Seek;
        let mut line_no = 0;
        for (idx, raw) in source.lines().enumerate() {
            line_no = idx + 1;
            state = match state {
                State::Seek => extractor.seek_line(raw, line_no)?,
                State::ImportBlock => extractor.import_block_line(raw, line_no)?,
                State::RecordBody { name, depth } => {
                    extractor.record_body_line(raw, line_no, name, depth)?
                }
                State::FunctionBody {
                    owner,
                    depth,
                    mut lines,
                } => {
                    let depth = depth + brace_delta(raw);
                    lines.push(raw.to_string());
                    if depth <= 0 {
                        extractor.outcome.bodies.push(FunctionBody { owner, lines });
                        State::Seek
                    } else {
                        State::FunctionBody {
                            owner,
                            depth,
                            lines,
                        }
                    }
                }
                State::VarBlock => extractor.var_block_line(raw, line_no)?,
                State::SkipBlock { depth } => {
                    let depth = depth + brace_delta(raw);
                    if depth <= 0 {
                        State::Seek
                    } else {
                        State::SkipBlock { depth }
                    }
                }
            };
        }

        // a window left open at end of file is a formatting problem we can't
        // recover from
        match state {
            State::Seek => Ok(extractor.outcome),
            State::VarBlock => Err(GopumlError::malformed_const_block(
                file,
                line_no,
                "unterminated var/const block",
            )),
            State::ImportBlock => Err(GopumlError::malformed_import(
                file,
                line_no,
                "unterminated import block",
            )),
            _ => Err(GopumlError::malformed_declaration(
                file,
                line_no,
                "unterminated declaration at end of file",
            )),
        }
    }

    /// Handle a line at the top level
    fn seek_line(&mut self, raw: &str, line_no: usize) -> Result<State> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(State::Seek);
        }

        if let Some(rest) = line.strip_prefix("import") {
            if rest.trim_start().starts_with('(') {
                return Ok(State::ImportBlock);
            }
            if rest.starts_with(char::is_whitespace) {
                let (alias, path) = imports::parse_single_import(line, self.file, line_no)?;
                self.outcome.imports.insert(alias, path);
                return Ok(State::Seek);
            }
        }

        if let Some(rest) = line.strip_prefix("type ") {
            return self.type_decl(rest, line, line_no);
        }

        if let Some(rest) = line.strip_prefix("func ") {
            return self.func_decl(rest, raw, line_no);
        }

        for keyword in ["var", "const"] {
            if let Some(rest) = line.strip_prefix(keyword) {
                if rest.trim_start().starts_with('(') {
                    return Ok(State::VarBlock);
                }
                if rest.starts_with(char::is_whitespace) {
                    self.single_var_decl(rest, line, line_no)?;
                    let depth = brace_delta(raw);
                    if depth > 0 {
                        // composite or function-literal initializer
                        return Ok(State::SkipBlock { depth });
                    }
                    return Ok(State::Seek);
                }
            }
        }

        // anything else (package clause, stray braces) is not a declaration;
        // still honor an opening brace so we never misread a block's inside
        let depth = brace_delta(raw);
        if depth > 0 {
            return Ok(State::SkipBlock { depth });
        }
        Ok(State::Seek)
    }

    /// Handle one line of a parenthesized import block
    fn import_block_line(&mut self, raw: &str, line_no: usize) -> Result<State> {
        if raw.trim() == ")" {
            return Ok(State::Seek);
        }
        if let Some((alias, path)) = imports::parse_block_import_line(raw, self.file, line_no)? {
            self.outcome.imports.insert(alias, path);
        }
        Ok(State::ImportBlock)
    }

    /// Handle a `type NAME DEFINITION` line
    fn type_decl(&mut self, rest: &str, line: &str, line_no: usize) -> Result<State> {
        let mut parts = rest.split_whitespace();
        let name = match parts.next() {
            Some(name) => name.to_string(),
            None => return Err(GopumlError::malformed_declaration(self.file, line_no, line)),
        };
        let definition: Vec<&str> = parts.collect();
        if definition.is_empty() {
            return Err(GopumlError::malformed_declaration(self.file, line_no, line));
        }

        self.outcome
            .type_index
            .insert(name.clone(), name.clone());

        if definition[0].starts_with("struct") {
            self.entity_mut(&name, EntityKind::Record);
            let depth = brace_delta(line);
            if depth > 0 {
                return Ok(State::RecordBody { name, depth });
            }
            return Ok(State::Seek);
        }

        // non-struct declaration: keep the right-hand text as the kind
        // marker (function-type aliases get special rendering downstream)
        let rhs = definition
            .join(" ")
            .trim_end_matches('{')
            .trim()
            .to_string();
        self.entity_mut(&name, EntityKind::Alias(rhs));
        let depth = brace_delta(line);
        if depth > 0 {
            // interface bodies and the like are not modeled
            return Ok(State::SkipBlock { depth });
        }
        Ok(State::Seek)
    }

    /// Handle one field line inside a struct body
    fn record_body_line(
        &mut self,
        raw: &str,
        line_no: usize,
        name: String,
        depth: i32,
    ) -> Result<State> {
        let delta = brace_delta(raw);
        let new_depth = depth + delta;
        if new_depth <= 0 {
            return Ok(State::Seek);
        }

        let line = raw.trim();
        // field lines live at depth 1; nested anonymous aggregates are skipped
        if !line.is_empty() && depth == 1 && delta == 0 {
            let mut parts = line.split_whitespace();
            let field_name = parts.next().unwrap_or_default();
            if field_name.is_empty() {
                return Err(GopumlError::empty_field_name(self.file, line_no, line));
            }
            let field_type = match parts.next() {
                Some(type_text) => type_text,
                None => {
                    return Err(GopumlError::malformed_declaration(self.file, line_no, line))
                }
            };
            // anything after the type is the optional tag; ignored
            self.entity_mut(&name, EntityKind::Record)
                .add_field(field_name, field_type);
        }

        Ok(State::RecordBody {
            name,
            depth: new_depth,
        })
    }

    /// Handle a `func` declaration line, binding it to its receiver type or
    /// to the module's global holder
    fn func_decl(&mut self, rest: &str, raw: &str, line_no: usize) -> Result<State> {
        let line = raw.trim();
        let (owner, signature) = if let Some(receiver) = rest.strip_prefix('(') {
            let close = receiver
                .find(')')
                .ok_or_else(|| GopumlError::malformed_declaration(self.file, line_no, line))?;
            let receiver_type = receiver[..close]
                .split_whitespace()
                .last()
                .map(|t| t.trim_start_matches('*'))
                .unwrap_or_default();
            if receiver_type.is_empty() {
                return Err(GopumlError::malformed_declaration(self.file, line_no, line));
            }
            self.entity_mut(receiver_type, EntityKind::Record);
            (receiver_type.to_string(), receiver[close + 1..].trim())
        } else {
            self.global_entity_mut();
            (self.global_name.clone(), rest)
        };

        let signature = signature.trim_end_matches('{').trim();
        let name_end = signature
            .find('(')
            .ok_or_else(|| GopumlError::malformed_declaration(self.file, line_no, line))?;
        let function_name = &signature[..name_end];
        if function_name.is_empty() {
            return Err(GopumlError::malformed_declaration(self.file, line_no, line));
        }

        let signature = signature.to_string();
        let function_name = function_name.to_string();
        self.entity_mut(&owner, EntityKind::Record)
            .add_function(&function_name, signature);

        // the declaration line itself belongs to the captured body: parameter
        // and return types count as usage
        let depth = brace_delta(raw);
        if depth > 0 {
            Ok(State::FunctionBody {
                owner,
                depth,
                lines: vec![raw.to_string()],
            })
        } else {
            self.outcome.bodies.push(FunctionBody {
                owner,
                lines: vec![raw.to_string()],
            });
            Ok(State::Seek)
        }
    }

    /// Handle one declaration line of a grouped var/const block
    fn var_block_line(&mut self, raw: &str, line_no: usize) -> Result<State> {
        let line = raw.trim();
        if line == ")" {
            return Ok(State::Seek);
        }
        if line.is_empty() {
            return Ok(State::VarBlock);
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        if name.is_empty() || name == "=" {
            return Err(GopumlError::malformed_const_block(self.file, line_no, line));
        }
        let type_text = match parts.next() {
            Some("=") | None => "",
            Some(type_text) => type_text,
        };
        self.register_global(name, type_text, line_no, line)?;
        Ok(State::VarBlock)
    }

    /// Parse a single-line var/const declaration.
    ///
    /// Three shapes are accepted: a plain `name Type`, a comma-separated name
    /// list sharing one trailing type, and a name list with an inline
    /// assignment (type recorded as empty when omitted).
    fn single_var_decl(&mut self, rest: &str, line: &str, line_no: usize) -> Result<()> {
        let declaration = rest.trim();
        if declaration.is_empty() {
            return Err(GopumlError::malformed_variable(self.file, line_no, line));
        }

        let names_part = match declaration.split_once('=') {
            Some((lhs, _)) => lhs.trim(),
            None => declaration,
        };
        if names_part.is_empty() {
            return Err(GopumlError::malformed_variable(self.file, line_no, line));
        }

        let segments: Vec<&str> = names_part.split(',').collect();
        let mut names = Vec::with_capacity(segments.len());
        let mut type_text = "";
        for (i, segment) in segments.iter().enumerate() {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(GopumlError::empty_variable_name(self.file, line_no, line));
            }
            let mut tokens = segment.split_whitespace();
            let name = tokens.next().unwrap_or_default();
            if let Some(trailing) = tokens.next() {
                // a shared type may only trail the last name
                if i != segments.len() - 1 {
                    return Err(GopumlError::malformed_variable(self.file, line_no, line));
                }
                type_text = trailing;
            }
            names.push(name);
        }

        for name in names {
            self.register_global(name, type_text, line_no, line)?;
        }
        Ok(())
    }

    /// Attach a top-level var/const to the global holder and index its name
    fn register_global(
        &mut self,
        name: &str,
        type_text: &str,
        line_no: usize,
        line: &str,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(GopumlError::empty_variable_name(self.file, line_no, line));
        }
        self.global_entity_mut().add_field(name, type_text);
        self.outcome
            .type_index
            .insert(name.to_string(), self.global_name.clone());
        Ok(())
    }

    fn global_entity_mut(&mut self) -> &mut Entity {
        let name = self.global_name.clone();
        self.outcome
            .entities
            .entry(name.clone())
            .or_insert_with(|| Entity::new(name, EntityKind::Global))
    }

    /// Fetch or create an entity, upgrading a Record placeholder when the
    /// real declaration arrives
    fn entity_mut(&mut self, name: &str, kind: EntityKind) -> &mut Entity {
        let entity = self
            .outcome
            .entities
            .entry(name.to_string())
            .or_insert_with(|| Entity::new(name, kind.clone()));
        if entity.kind == EntityKind::Record && kind != EntityKind::Record {
            entity.kind = kind;
        }
        entity
    }
}

/// Net brace depth change of a line, ignoring braces inside string, raw
/// string, and rune literals
fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' && q != '`' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '`' | '\'' => quote = Some(c),
                '{' => delta += 1,
                '}' => delta -= 1,
                _ => {}
            },
        }
    }
    delta
}
