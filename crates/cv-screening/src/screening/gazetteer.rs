use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Which entry wins when several known cities occur in the same document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CityPrecedence {
    /// First entry in gazetteer file order.
    #[default]
    GazetteerOrder,
    /// Entry occurring earliest in the document text.
    TextPosition,
}

/// Ordered, lower-cased list of known city names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gazetteer {
    cities: Vec<String>,
}

impl Gazetteer {
    /// Blank lines are skipped and duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let cities = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Self { cities }
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, std::io::Error> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(Self::from_names(contents.lines()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GazetteerError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| GazetteerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file).map_err(|source| GazetteerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Looks up a city in already lower-cased text.
    pub fn lookup(&self, normalized: &str, precedence: CityPrecedence) -> Option<&str> {
        match precedence {
            CityPrecedence::GazetteerOrder => self
                .cities
                .iter()
                .find(|city| normalized.contains(city.as_str()))
                .map(String::as_str),
            CityPrecedence::TextPosition => self
                .cities
                .iter()
                .filter_map(|city| normalized.find(city.as_str()).map(|at| (at, city)))
                .min_by_key(|(at, _)| *at)
                .map(|(_, city)| city.as_str()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("failed to read gazetteer {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_skips_blank_lines_and_lowercases() {
        let gazetteer =
            Gazetteer::from_reader("Jakarta\n\n  Bandung  \nSURABAYA\njakarta\n".as_bytes())
                .expect("reads");
        assert_eq!(gazetteer.cities(), ["jakarta", "bandung", "surabaya"]);
    }

    #[test]
    fn precedence_decides_between_co_occurring_cities() {
        let gazetteer = Gazetteer::from_names(["jakarta", "bandung"]);
        let text = "lahir di bandung, sekarang tinggal di jakarta";
        assert_eq!(
            gazetteer.lookup(text, CityPrecedence::GazetteerOrder),
            Some("jakarta")
        );
        assert_eq!(
            gazetteer.lookup(text, CityPrecedence::TextPosition),
            Some("bandung")
        );
        assert_eq!(gazetteer.lookup("medan", CityPrecedence::GazetteerOrder), None);
    }

    #[test]
    fn from_path_reads_file_and_reports_missing_files() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Yogyakarta\nSemarang").expect("write gazetteer");
        let gazetteer = Gazetteer::from_path(file.path()).expect("loads");
        assert_eq!(gazetteer.len(), 2);

        let error = Gazetteer::from_path("./no-such-gazetteer.txt").expect_err("missing file");
        assert!(error.to_string().contains("no-such-gazetteer.txt"));
    }
}
