//! Option specifications for configure-style build scripts.

use serde::{Deserialize, Deserializer, Serialize};

/// A declared configuration flag recognized by one library's build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Canonical flag name without leading dashes.
    pub name: String,

    /// Short-form synonyms.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Whether the option carries a value (`--name=value`).
    pub is_keyword: bool,

    /// Accepted values; `None` inside the set means the option may also be
    /// given bare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Option<String>>>,
}

impl OptionSpec {
    /// Whether the option may be used without `=value`.
    pub fn accepts_bare(&self) -> bool {
        if !self.is_keyword {
            return true;
        }
        self.allowed_values
            .as_ref()
            .is_some_and(|values| values.iter().any(Option::is_none))
    }

    /// Whether `value` is acceptable for this option.
    pub fn accepts_value(&self, value: &str) -> bool {
        match &self.allowed_values {
            None => true,
            Some(values) => values.iter().flatten().any(|v| v == value),
        }
    }

    /// Allowed values rendered for error messages.
    pub fn allowed_display(&self) -> String {
        match &self.allowed_values {
            None => "any".to_string(),
            Some(values) => values
                .iter()
                .map(|v| v.as_deref().unwrap_or("<none>"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Every token this option answers to.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Declaration of an option, as written in a build profile or by hand.
///
/// # Example
///
/// ```
/// use ffdeps::options::OptionDef;
///
/// let def = OptionDef::flag("quiet").alias("q").alias("silent");
/// let depth = OptionDef::keyword("bit-depth").values(&["all", "8", "10"]);
/// let help = OptionDef::flag("help").values(&["short", "recursive"]).bare();
/// # let _ = (def, depth, help);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDef {
    pub name: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub keyword: bool,

    #[serde(default, deserialize_with = "scalar_values")]
    pub values: Option<Vec<Option<String>>>,
}

impl OptionDef {
    /// A plain option that takes no value.
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// An option that takes a value.
    pub fn keyword(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keyword: true,
            ..Default::default()
        }
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Restrict the option to a fixed set of values.
    pub fn values(mut self, values: &[&str]) -> Self {
        let set = self.values.get_or_insert_with(Vec::new);
        set.extend(values.iter().map(|v| Some(v.to_string())));
        self
    }

    /// Also allow the option without a value.
    pub fn bare(mut self) -> Self {
        self.values.get_or_insert_with(Vec::new).push(None);
        self
    }

    /// Turn the declaration into a spec.
    ///
    /// A non-empty value set always makes the option a keyword option.
    pub(crate) fn into_spec(self) -> OptionSpec {
        let allowed_values = self.values.filter(|v| !v.is_empty());
        OptionSpec {
            name: normalize_token(&self.name).to_string(),
            aliases: self
                .aliases
                .iter()
                .map(|a| normalize_token(a).to_string())
                .collect(),
            is_keyword: self.keyword || allowed_values.is_some(),
            allowed_values,
        }
    }
}

/// Strip leading dash and underscore punctuation from an option token.
pub fn normalize_token(token: &str) -> &str {
    token.trim().trim_start_matches(['-', '_'])
}

// Accepts `[~, yes, 8, "all"]`: nulls mean "bare", scalars become strings.
fn scalar_values<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw: Option<Vec<serde_yaml::Value>> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    raw.into_iter()
        .map(|value| match value {
            serde_yaml::Value::Null => Ok(None),
            serde_yaml::Value::String(s) => Ok(Some(s)),
            serde_yaml::Value::Number(n) => Ok(Some(n.to_string())),
            serde_yaml::Value::Bool(b) => Ok(Some(if b { "yes" } else { "no" }.to_string())),
            other => Err(D::Error::custom(format!(
                "option values must be scalars, got {:?}",
                other
            ))),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
