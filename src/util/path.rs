/// Breadcrumb decomposition of a slash-separated path.
///
/// Yields `(segment, cumulative_path)` pairs where the cumulative path is
/// every segment seen so far joined with `/`. The value is `Copy`, so the
/// same sequence can be iterated any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subpaths<'a> {
    path: &'a str,
}

/// Split `path` into breadcrumb pairs; `""` yields a single `("", "")`
pub fn subpaths(path: &str) -> Subpaths<'_> {
    Subpaths { path }
}

impl<'a> Subpaths<'a> {
    pub fn iter(&self) -> SubpathIter<'a> {
        SubpathIter {
            path: self.path,
            segments: self.path.split('/'),
            end: None,
        }
    }
}

impl<'a> IntoIterator for Subpaths<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = SubpathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct SubpathIter<'a> {
    path: &'a str,
    segments: std::str::Split<'a, char>,
    end: Option<usize>,
}

impl<'a> Iterator for SubpathIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.next()?;
        // Segments joined by '/' are exactly a prefix of the input
        let start = self.end.map_or(0, |end| end + 1);
        let end = start + segment.len();
        self.end = Some(end);
        Some((segment, &self.path[..end]))
    }
}

/// Strip leading and trailing slashes; the empty string is the root
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a normalized path into `(directory, filename)`
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", path),
    }
}

/// Directory containing `path`; a root-level name has the root as parent
pub fn parent_path(path: &str) -> &str {
    split_path(path).0
}

/// Compose a directory path with an entry name
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
