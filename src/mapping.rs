use std::fmt::Display;

use serde::Deserialize;

/// A description of a file or directory to be installed by the package: where it goes, which
/// attributes it gets, and which source files it is made of.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Mapping {
    /// destination directory during package installation
    pub directory: Option<String>,
    /// file name used during package installation
    pub filename: Option<String>,
    /// whether the files are configuration files
    #[serde(default)]
    pub configuration: bool,
    /// whether the files are documentation files
    #[serde(default)]
    pub documentation: bool,
    /// UNIX permissions as three-digit octal number
    pub filemode: Option<String>,
    /// name (not numeric ID) of the user that owns the installed files
    pub username: Option<String>,
    /// name (not numeric ID) of the group that owns the installed files
    pub groupname: Option<String>,
    /// source file specifications; a mapping without sources is a directory
    pub sources: Option<Vec<String>>,
}

impl Mapping {
    /// Attributes in the form used in the `%files` section of a spec file, for example
    /// `%config %attr(644,root,root)`.
    pub fn attr_string(&self) -> String {
        let mut attrs = String::new();

        if self.configuration {
            attrs.push_str("%config ");
        }

        if self.documentation {
            attrs.push_str("%doc ");
        }

        if self.is_dir_only() {
            attrs.push_str("%dir ");
        }

        attrs.push_str(&format!(
            "%attr({},{},{})",
            self.filemode.as_deref().unwrap_or("-"),
            self.username.as_deref().unwrap_or("-"),
            self.groupname.as_deref().unwrap_or("-"),
        ));

        attrs
    }

    /// Installed location of the mapping, or `nowhere` if no directory is set.
    pub fn destination(&self) -> String {
        match (&self.directory, &self.filename) {
            (None, _) => String::from("nowhere"),
            (Some(directory), None) => directory.clone(),
            (Some(directory), Some(filename)) => format!("{}/{}", directory, filename),
        }
    }

    fn is_dir_only(&self) -> bool {
        match &self.sources {
            Some(sources) => sources.is_empty(),
            None => true,
        }
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[\"{}\" {{{}}}", self.destination(), self.attr_string())?;

        match &self.sources {
            Some(sources) => write!(f, " from [{}]]", sources.join(", ")),
            None => write!(f, " (dir only)]"),
        }
    }
}

/// This helper function renders one line per mapping.
pub fn mappings_listing(mappings: &[Mapping]) -> String {
    let mut listing = String::new();

    for mapping in mappings {
        listing.push_str(&mapping.to_string());
        listing.push('\n');
    }

    listing
}
