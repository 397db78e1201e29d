use std::path::{Path, PathBuf};

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

const MAX_RESULTS: usize = 10;
/// Hard cap on indexed paths so a huge directory cannot balloon memory.
const MAX_INDEXED: usize = 20_000;

/// Fuzzy file browser used to pick a file for upload. It lists every
/// regular file (PDF validation happens in the upload form, the same
/// path a typed filename takes), ranking PDFs first so the common case
/// is one keystroke away.
pub struct FilePicker {
    root: PathBuf,
    paths: Vec<String>,
    matcher: Matcher,
    pub query: String,
    pub selected: usize,
    matches: Vec<String>,
}

impl FilePicker {
    /// Walk `root` with `.gitignore` awareness and build a fresh index.
    /// Synchronous; directories of a few thousand files index in
    /// milliseconds, and the picker is rebuilt on every open.
    #[must_use]
    pub fn open(root: &Path) -> Self {
        let mut paths = Vec::new();
        let walker = ignore::WalkBuilder::new(root)
            .hidden(true)
            .ignore(true)
            .git_ignore(true)
            .build();

        for entry in walker.flatten() {
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                let path = entry.path();
                let rel = path.strip_prefix(root).unwrap_or(path);
                if let Some(s) = rel.to_str() {
                    paths.push(s.replace('\\', "/"));
                }
                if paths.len() >= MAX_INDEXED {
                    tracing::warn!(
                        max = MAX_INDEXED,
                        root = %root.display(),
                        "file picker cap reached; some files will not be listed"
                    );
                    break;
                }
            }
        }
        // PDFs before everything else, alphabetical within each group.
        paths.sort_unstable_by(|a, b| {
            is_pdf_name(b)
                .cmp(&is_pdf_name(a))
                .then_with(|| a.cmp(b))
        });

        let mut picker = Self {
            root: root.to_path_buf(),
            paths,
            matcher: Matcher::new(Config::DEFAULT),
            query: String::new(),
            selected: 0,
            matches: Vec::new(),
        };
        picker.refilter();
        picker
    }

    #[must_use]
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Absolute path of the highlighted entry, if any.
    #[must_use]
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.matches.get(self.selected).map(|rel| self.root.join(rel))
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        let len_i = i32::try_from(len).unwrap_or(i32::MAX);
        let cur_i = i32::try_from(self.selected).unwrap_or(0);
        let new_i = (cur_i + delta).rem_euclid(len_i);
        self.selected = usize::try_from(new_i).unwrap_or(0);
    }

    fn refilter(&mut self) {
        self.selected = 0;
        if self.query.is_empty() {
            self.matches = self.paths.iter().take(MAX_RESULTS).cloned().collect();
            return;
        }

        let pattern = Pattern::new(
            &self.query,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut scored: Vec<(String, u32)> = self
            .paths
            .iter()
            .filter_map(|p| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(p, &mut buf);
                pattern
                    .score(haystack, &mut self.matcher)
                    .map(|score| (p.clone(), score))
            })
            .collect();

        scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(MAX_RESULTS);
        self.matches = scored.into_iter().map(|(p, _)| p).collect();
    }
}

fn is_pdf_name(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn make_picker(files: &[&str]) -> (FilePicker, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        for &f in files {
            let path = dir.path().join(f);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "").unwrap();
        }
        let picker = FilePicker::open(dir.path());
        (picker, dir)
    }

    #[test]
    fn open_indexes_files() {
        let (picker, _dir) = make_picker(&["a.pdf", "notes/b.txt"]);
        assert_eq!(picker.matches().len(), 2);
    }

    #[test]
    fn pdfs_rank_before_other_files() {
        let (picker, _dir) = make_picker(&["aaa.txt", "zzz.pdf"]);
        assert_eq!(picker.matches()[0], "zzz.pdf");
    }

    #[test]
    fn query_filters_fuzzily() {
        let (mut picker, _dir) = make_picker(&["reports/q3.pdf", "notes.txt"]);
        picker.push_char('q');
        picker.push_char('3');
        assert_eq!(picker.matches().len(), 1);
        assert!(picker.matches()[0].contains("q3"));
    }

    #[test]
    fn pop_char_restores_wider_match_set() {
        let (mut picker, _dir) = make_picker(&["a.pdf", "b.pdf"]);
        picker.push_char('a');
        assert_eq!(picker.matches().len(), 1);
        picker.pop_char();
        assert_eq!(picker.matches().len(), 2);
    }

    #[test]
    fn selected_path_is_absolute() {
        let (picker, dir) = make_picker(&["a.pdf"]);
        let path = picker.selected_path().unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.ends_with("a.pdf"));
    }

    #[test]
    fn no_match_yields_no_selection() {
        let (mut picker, _dir) = make_picker(&["a.pdf"]);
        picker.push_char('z');
        picker.push_char('z');
        assert!(picker.selected_path().is_none());
    }

    #[test]
    fn move_selection_wraps() {
        let (mut picker, _dir) = make_picker(&["a.pdf", "b.pdf", "c.pdf"]);
        picker.move_selection(-1);
        assert_eq!(picker.selected, 2);
        picker.move_selection(1);
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn empty_query_caps_at_max_results() {
        let files: Vec<String> = (0..15).map(|i| format!("f{i:02}.pdf")).collect();
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let (picker, _dir) = make_picker(&refs);
        assert_eq!(picker.matches().len(), MAX_RESULTS);
    }

    #[test]
    fn non_pdf_is_still_listed() {
        // Validation lives in the upload form; the picker must not hide
        // the file or the shared rejection path would be unreachable.
        let (mut picker, _dir) = make_picker(&["readme.txt"]);
        picker.push_char('r');
        assert_eq!(picker.matches().len(), 1);
    }
}
