//! Run orchestration
//!
//! Drives the two-pass pipeline over a source tree. Pass 1 ingests every
//! discovered file and extracts its declarations into the model. Only once
//! every file has contributed is the whole-run type map built; pass 2 then
//! scans the captured function bodies for usage. The barrier between the
//! passes is what makes the result independent of file processing order.

use crate::core::discovery::{self, DiscoveredFile};
use crate::error::{Result, ResultExt};
use crate::models::{Model, RelationshipEdge, Settings, SourceFile};
use crate::parsers::{strip_comments, Extractor, GraphBuilder};
use crate::parsers::usage;
use std::fs;

/// The outcome of one full run
#[derive(Debug)]
pub struct Analysis {
    pub model: Model,
    pub edges: Vec<RelationshipEdge>,
    /// Number of source files ingested
    pub file_count: usize,
}

/// Two-pass analyzer over one source tree
pub struct Analyzer {
    settings: Settings,
}

impl Analyzer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Discover, extract, resolve, and build the relationship graph
    pub fn run(&self) -> Result<Analysis> {
        let files = discovery::discover(&self.settings)?;
        let file_count = files.len();

        let mut model = Model::new();
        for file in files {
            self.ingest(&mut model, file)?;
        }

        // pass barrier: every declaration is in before any usage resolves
        model.build_type_map();
        self.scan_usage(&mut model);

        let edges = GraphBuilder::new(&model, self.settings.include_globals).build();
        Ok(Analysis {
            model,
            edges,
            file_count,
        })
    }

    /// Pass 1 for one file: strip comments, extract declarations, and fold
    /// the outcome into the owning module
    fn ingest(&self, model: &mut Model, file: DiscoveredFile) -> Result<()> {
        let raw = fs::read_to_string(&file.path)
            .with_context(|| format!("reading source file {}", file.path.display()))?;
        let stripped = strip_comments(&raw);

        let outcome = Extractor::extract(&file.name, &file.module_path, &stripped)?;

        let module = model.module_mut(&file.module_path);
        let mut source_file =
            SourceFile::new(file.path, file.name, file.module_path.clone(), stripped);
        source_file.imports = outcome.imports;
        source_file.bodies = outcome.bodies;

        for entity in outcome.entities.into_values() {
            module.merge_entity(entity);
        }
        module.type_index.extend(outcome.type_index);
        module.files.insert(source_file.name.clone(), source_file);
        Ok(())
    }

    /// Pass 2: propose relationship candidates from every captured body line
    fn scan_usage(&self, model: &mut Model) {
        let mut found: Vec<(String, String, String)> = Vec::new();
        for (module_path, module) in &model.modules {
            for file in module.files.values() {
                for body in &file.bodies {
                    for line in &body.lines {
                        for candidate in usage::candidates_in_line(
                            line,
                            &body.owner,
                            module_path,
                            &file.imports,
                            &module.type_index,
                        ) {
                            found.push((module_path.clone(), body.owner.clone(), candidate));
                        }
                    }
                }
            }
        }

        for (module_path, owner, candidate) in found {
            if let Some(entity) = model
                .modules
                .get_mut(&module_path)
                .and_then(|module| module.entities.get_mut(&owner))
            {
                entity.relationships.insert(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeKind, EntityKind};
    use std::fs;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, relative: &str, source: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    fn run(dir: &TempDir, include_globals: bool) -> Analysis {
        let settings = Settings {
            scan_path: dir.path().to_path_buf(),
            include_globals,
            ..Default::default()
        };
        Analyzer::new(settings).run().unwrap()
    }

    #[test]
    fn test_cross_module_directed_edge() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "src/a/a.go",
            "package a\n\ntype Foo struct {\n\tName string\n}\n",
        );
        write_source(
            &dir,
            "src/b/b.go",
            "package b\n\nimport \"../a\"\n\ntype Bar struct {\n\tid int\n}\n\nfunc (b *Bar) Load() {\n\tf := a.Foo{}\n\t_ = f\n}\n",
        );

        let analysis = run(&dir, false);
        assert_eq!(analysis.file_count, 2);
        assert_eq!(analysis.edges.len(), 1);
        assert_eq!(analysis.edges[0].render(), "b.Bar --> a.Foo");
    }

    #[test]
    fn test_mutual_references_collapse() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "src/a/a.go",
            "package a\n\n\
             type Foo struct {\n\tpartner Baz\n}\n\n\
             type Baz struct {\n\tback Foo\n}\n\n\
             func (f *Foo) Link(b Baz) {}\n\n\
             func (b *Baz) Unlink(f Foo) {}\n",
        );

        let analysis = run(&dir, false);
        assert_eq!(analysis.edges.len(), 1);
        assert_eq!(analysis.edges[0].kind, EdgeKind::Undirected);
        assert_eq!(analysis.edges[0].render(), "a.Baz --- a.Foo");
    }

    #[test]
    fn test_global_aggregation_and_default_suppression() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "src/util/util.go",
            "package util\n\nvar Debug bool\n\nfunc Log(msg string) {}\n",
        );
        write_source(
            &dir,
            "src/app/app.go",
            "package app\n\nimport \"../util\"\n\n\
             type App struct {\n\tname string\n}\n\n\
             func (a *App) Run() {\n\tutil.Log(a.name)\n}\n",
        );

        let analysis = run(&dir, false);
        let util = &analysis.model.modules["util"];
        let holder = &util.entities["UtilGlobal"];
        assert_eq!(holder.kind, EntityKind::Global);
        assert!(holder.public_fields.contains_key("Debug"));
        assert!(holder.public_functions.contains("Log(msg string)"));
        // edges touching the holder are suppressed by default
        assert!(analysis.edges.is_empty());

        let analysis = run(&dir, true);
        assert_eq!(analysis.edges.len(), 1);
        assert_eq!(analysis.edges[0].render(), "app.App --> util.UtilGlobal");
    }

    #[test]
    fn test_type_split_across_files_aggregates() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "src/a/decl.go",
            "package a\n\ntype Foo struct {\n\tName string\n}\n",
        );
        write_source(
            &dir,
            "src/a/methods.go",
            "package a\n\nfunc (f *Foo) Render() string {\n\treturn f.Name\n}\n",
        );

        let analysis = run(&dir, false);
        let module = &analysis.model.modules["a"];
        assert_eq!(module.entities.len(), 1);
        let foo = &module.entities["Foo"];
        assert!(foo.public_fields.contains_key("Name"));
        assert!(foo.public_functions.contains("Render() string"));
    }

    #[test]
    fn test_malformed_import_fails_the_run() {
        let dir = TempDir::new().unwrap();
        write_source(
            &dir,
            "src/a/a.go",
            "package a\n\nimport (\n\tw netwire\n)\n",
        );

        let settings = Settings {
            scan_path: dir.path().to_path_buf(),
            ..Default::default()
        };
        let err = Analyzer::new(settings).run().unwrap_err();
        assert!(matches!(
            err,
            crate::error::GopumlError::MalformedImport { .. }
        ));
    }
}
