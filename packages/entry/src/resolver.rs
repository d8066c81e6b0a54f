//! Entry Resolver
//!
//! Discovers page entry points under the configured page directory and
//! expands the transitive closure of `usingComponents` references into the
//! final entry list handed to the build orchestrator.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::component::ComponentConfig;
use crate::diagnostics::Diagnostic;
use crate::entry::{EntryDescriptor, EntrySet};
use crate::paths;

/// Resolver configuration beyond the (context, entry) pair.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Name of the page subdirectory under the app root.
    pub page_dir: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            page_dir: "pages".to_string(),
        }
    }
}

/// Outcome of one resolution run.
#[derive(Debug)]
pub struct Resolution {
    /// Discovered entries, in deterministic discovery order.
    pub entries: Vec<EntryDescriptor>,
    /// Non-fatal conditions observed along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Computes build entries for one mini-app project.
///
/// The resolver holds only configuration; every call to [`resolve`]
/// constructs fresh run state, so runs never observe each other.
///
/// [`resolve`]: EntryResolver::resolve
pub struct EntryResolver {
    context: PathBuf,
    entry: String,
    options: ResolverOptions,
}

impl EntryResolver {
    /// `context` is the base directory all emitted paths are relative to;
    /// `entry` is the root application file, relative to `context`. The
    /// entry's extension becomes the fixed extension for page matching and
    /// sidecar discovery.
    pub fn new(context: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        EntryResolver {
            context: context.into(),
            entry: entry.into(),
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Run resolution, collecting diagnostics on the result.
    pub fn resolve(&self) -> anyhow::Result<Resolution> {
        self.resolve_with_reporter(|_| {})
    }

    /// Run resolution, forwarding each diagnostic to `report` as it is
    /// produced in addition to collecting it on the result.
    pub fn resolve_with_reporter<F>(&self, report: F) -> anyhow::Result<Resolution>
    where
        F: FnMut(&Diagnostic),
    {
        let mut run = ResolutionRun::new(&self.context, &self.entry, &self.options, report);
        run.resolve_entries()?;
        Ok(Resolution {
            entries: run.entries.into_vec(),
            diagnostics: run.diagnostics,
        })
    }
}

/// State of a single resolution run, discarded after the entry list is
/// handed off.
struct ResolutionRun<'a, F> {
    context: &'a Path,
    /// Forward-slash form of `context`, for relative-path arithmetic.
    context_posix: String,
    entry: String,
    options: &'a ResolverOptions,
    /// Extension of the root entry, dot included. Every page match and
    /// every sidecar lookup uses this extension.
    ext: String,
    /// Directory of the root entry, forward-slash form. Component
    /// references without a leading dot resolve against it.
    app_root: String,
    entries: EntrySet,
    /// Paths already queued for component expansion, keyed by the
    /// normalized context-relative path. Guards termination on cyclic
    /// component references.
    visited: HashSet<String>,
    pending: VecDeque<String>,
    diagnostics: Vec<Diagnostic>,
    report: F,
}

impl<'a, F> ResolutionRun<'a, F>
where
    F: FnMut(&Diagnostic),
{
    fn new(context: &'a Path, entry: &str, options: &'a ResolverOptions, report: F) -> Self {
        ResolutionRun {
            context,
            context_posix: paths::to_forward_slashes(context),
            entry: entry.to_string(),
            options,
            ext: paths::extension(entry).to_string(),
            app_root: paths::app_root(context, entry),
            entries: EntrySet::new(),
            visited: HashSet::new(),
            pending: VecDeque::new(),
            diagnostics: Vec::new(),
            report,
        }
    }

    fn resolve_entries(&mut self) -> anyhow::Result<()> {
        let root = paths::ensure_dot_prefix(&self.entry);
        self.add(root, None);
        self.enumerate_pages()?;
        while let Some(path) = self.pending.pop_front() {
            self.expand_components(&path);
        }
        Ok(())
    }

    /// One entry per page file under the pages root. A missing directory or
    /// an empty match set contributes nothing.
    fn enumerate_pages(&mut self) -> anyhow::Result<()> {
        let pages_root = paths::join(&self.app_root, &self.options.page_dir);
        let pattern = format!("{}/**/*{}", pages_root, self.ext);
        let matches = glob::glob(&pattern)
            .with_context(|| format!("invalid page glob pattern `{}`", pattern))?;
        for path in matches.flatten() {
            self.add_page_entry(&pages_root, &path);
        }
        Ok(())
    }

    /// Name a page after its own folder: `pages/home/index.js` becomes
    /// `home/home`, so the emitted bundle shares the folder's name no matter
    /// what the matched file is called. A file sitting directly in the pages
    /// root falls back to its own stem.
    fn add_page_entry(&mut self, pages_root: &str, file: &Path) {
        let file = paths::to_forward_slashes(file);
        let relative = paths::relative_to(&self.context_posix, &file);
        let in_pages = paths::relative_to(pages_root, &file);
        let dir = paths::parent(&in_pages);
        let name = if dir.is_empty() {
            paths::strip_ext(paths::file_name(&in_pages)).to_string()
        } else {
            format!("{}/{}", dir, paths::file_name(dir))
        };
        self.add(paths::ensure_dot_prefix(&relative), Some(name));
    }

    /// Single choke point for root, page and component entries: dedup the
    /// descriptor, and queue the path for component expansion when it is a
    /// source file not seen before.
    fn add(&mut self, path: String, name: Option<String>) {
        if path.is_empty() {
            return;
        }
        if !self.ext.is_empty()
            && paths::extension(&path) == self.ext
            && self.visited.insert(path.clone())
        {
            self.pending.push_back(path.clone());
        }
        self.entries.insert(EntryDescriptor::new(path, name));
    }

    /// Pull component references out of the sidecar config next to `path`
    /// and feed each one back through [`add`](Self::add).
    fn expand_components(&mut self, path: &str) {
        let sidecar = self.context.join(paths::replace_ext(path, ".json"));
        let config = match ComponentConfig::load(&sidecar) {
            Ok(Some(config)) => config,
            Ok(None) => return,
            Err(e) => {
                self.warn(format!("skipping component config: {}", e), &sidecar);
                return;
            }
        };
        for (id, value) in &config.using_components {
            let raw = match value.as_str() {
                Some(raw) if !raw.is_empty() => raw,
                Some(_) => {
                    self.warn(format!("component `{}` has an empty path", id), &sidecar);
                    continue;
                }
                None => {
                    self.warn(format!("component `{}` has a non-string path", id), &sidecar);
                    continue;
                }
            };
            let (name, resolved) =
                resolve_component_ref(&self.context_posix, &self.app_root, &self.ext, raw);
            self.add(resolved, Some(name));
        }
    }

    fn warn(&mut self, message: String, file: &Path) {
        let diagnostic = Diagnostic::warning(message, paths::to_forward_slashes(file));
        (self.report)(&diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Resolve one `usingComponents` value into `(name, path)`.
///
/// References never carry an extension; the root extension is appended
/// first. A reference without a leading dot is root-relative: it is joined
/// onto `app_root` (a leading `/` only marks the root, it is not a
/// filesystem-absolute path) and re-expressed relative to the context
/// directory. A dotted reference is already context-relative and passes
/// through unchanged.
fn resolve_component_ref(context: &str, app_root: &str, ext: &str, raw: &str) -> (String, String) {
    let with_ext = paths::replace_ext(raw, ext);
    if with_ext.starts_with('.') {
        return (paths::strip_ext(&with_ext).to_string(), with_ext);
    }
    let joined = paths::join(app_root, with_ext.trim_start_matches('/'));
    let relative = paths::relative_to(context, &joined);
    (
        paths::strip_ext(&relative).to_string(),
        paths::ensure_dot_prefix(&relative),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_relative_references_resolve_against_the_app_root() {
        let (name, path) =
            resolve_component_ref("/proj/src", "/proj/src", ".js", "/widgets/button");
        assert_eq!(name, "widgets/button");
        assert_eq!(path, "./widgets/button.js");
    }

    #[test]
    fn bare_references_are_also_root_relative() {
        let (name, path) =
            resolve_component_ref("/proj/src", "/proj/src", ".js", "components/banner/banner");
        assert_eq!(name, "components/banner/banner");
        assert_eq!(path, "./components/banner/banner.js");
    }

    #[test]
    fn dotted_references_pass_through_unresolved() {
        let (name, path) = resolve_component_ref("/proj/src", "/proj/src", ".js", "../shared/icon");
        assert_eq!(name, "../shared/icon");
        assert_eq!(path, "../shared/icon.js");
    }

    #[test]
    fn root_relative_resolution_honors_a_nested_app_root() {
        let (name, path) =
            resolve_component_ref("/proj", "/proj/src", ".ts", "/widgets/button");
        assert_eq!(name, "src/widgets/button");
        assert_eq!(path, "./src/widgets/button.ts");
    }

    #[test]
    fn references_keep_the_root_extension_even_when_already_suffixed() {
        let (_, path) = resolve_component_ref("/proj/src", "/proj/src", ".js", "/widgets/button.vue");
        assert_eq!(path, "./widgets/button.js");
    }
}
