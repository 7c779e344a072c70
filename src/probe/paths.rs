use anyhow::{bail, Result};

/// Placeholder substituted with the module name in every template.
pub const MODULE_PLACEHOLDER: &str = "{mod}";

const METADATA_SUFFIX: &str = ".info.yml";

/// Default Drupal module locations, highest priority first.
pub fn drupal_paths() -> Vec<&'static str> {
    vec![
        "/modules/contrib/{mod}/{mod}.info.yml",
        "/modules/custom/{mod}/{mod}.info.yml",
        "/modules/contrib/{mod}/README.txt",
        "/modules/contrib/{mod}/LICENSE.txt",
        "/modules/contrib/{mod}/{mod}.js",
        "/modules/contrib/{mod}/",
        "/modules/custom/{mod}/",
        "/sites/all/modules/{mod}/{mod}.info.yml",
        "/sites/all/modules/{mod}/README.txt",
        "/sites/all/modules/{mod}/LICENSE.txt",
        "/sites/all/modules/{mod}/{mod}.js",
        "/sites/all/modules/{mod}/",
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    pattern: String,
    metadata: bool,
}

impl PathTemplate {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(MODULE_PLACEHOLDER) {
            bail!("path template '{}' has no {} placeholder", pattern, MODULE_PLACEHOLDER);
        }
        let metadata = pattern.ends_with(METADATA_SUFFIX);
        Ok(Self { pattern, metadata })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True for module descriptor files that may carry a `version:` line.
    pub fn is_metadata(&self) -> bool {
        self.metadata
    }

    pub fn render(&self, module: &str) -> String {
        self.pattern.replace(MODULE_PLACEHOLDER, module)
    }
}

/// A concrete URL to request for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    pub url: String,
    pub metadata: bool,
}

/// Ordered set of path templates. Order is probe priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplateSet {
    templates: Vec<PathTemplate>,
}

impl PathTemplateSet {
    pub fn from_templates<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = patterns
            .into_iter()
            .map(PathTemplate::new)
            .collect::<Result<Vec<_>>>()?;
        if templates.is_empty() {
            bail!("path template set is empty");
        }
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[PathTemplate] {
        &self.templates
    }

    /// Concrete URLs for `module` in priority order.
    pub fn candidates<'a>(&'a self, base_url: &'a str, module: &'a str) -> impl Iterator<Item = CandidateUrl> + 'a {
        let base = base_url.strip_suffix('/').unwrap_or(base_url);
        self.templates.iter().map(move |t| CandidateUrl {
            url: format!("{}{}", base, t.render(module)),
            metadata: t.is_metadata(),
        })
    }
}

impl Default for PathTemplateSet {
    fn default() -> Self {
        Self {
            templates: drupal_paths()
                .into_iter()
                .map(|p| PathTemplate {
                    pattern: p.to_string(),
                    metadata: p.ends_with(METADATA_SUFFIX),
                })
                .collect(),
        }
    }
}
